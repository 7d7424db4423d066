/// Edge list import and export tools
///
/// This module reads and writes weighted edge lists in CSV and JSON so that
/// graphs can be fed to the relaxation engine from files.

pub mod import;
pub mod export;

pub use import::{import_edges, import_from_csv, import_from_json, ImportOptions, ImportStats, ImportedEdges};
pub use export::{export_edges, export_to_csv, export_to_json, ExportOptions};

use std::path::Path;
use thiserror::Error;

/// On-disk edge list format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// `tail,head,weight` with a header row
    Csv,
    /// `{"edges": [{"tail": .., "head": .., "weight": ..}]}`
    Json,
}

impl EdgeListFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(EdgeListFormat::Csv),
            Some("json") => Ok(EdgeListFormat::Json),
            _ => Err(ToolError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Import/export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type ToolResult<T> = Result<T, ToolError>;
