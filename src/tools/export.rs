/// Edge list export utilities
///
/// Supports writing weighted edge lists as:
/// - CSV files (`tail,head,weight`)
/// - JSON files (`{"edges": [...]}`)

use super::{EdgeListFormat, ToolResult};
use crate::types::WeightedEdge;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Include header row in CSV
    pub csv_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            csv_header: true,
        }
    }
}

#[derive(Serialize)]
struct JsonEdgeListRef<'a, V, W> {
    edges: &'a [WeightedEdge<V, W>],
}

/// Export edges to a CSV file
///
/// Returns the number of edges written.
pub fn export_to_csv<P, V, W>(
    edges: &[WeightedEdge<V, W>],
    path: P,
    options: &ExportOptions,
) -> ToolResult<usize>
where
    P: AsRef<Path>,
    V: Serialize,
    W: Serialize,
{
    let file = File::create(path.as_ref())?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(options.csv_header)
        .from_writer(BufWriter::new(file));

    for edge in edges {
        writer.serialize(edge)?;
    }

    writer.flush()?;
    info!(edges = edges.len(), path = %path.as_ref().display(), "exported edge list to CSV");
    Ok(edges.len())
}

/// Export edges to a JSON file
///
/// Returns the number of edges written.
pub fn export_to_json<P, V, W>(
    edges: &[WeightedEdge<V, W>],
    path: P,
    options: &ExportOptions,
) -> ToolResult<usize>
where
    P: AsRef<Path>,
    V: Serialize,
    W: Serialize,
{
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    let document = JsonEdgeListRef { edges };

    if options.pretty_json {
        serde_json::to_writer_pretty(&mut writer, &document)?;
    } else {
        serde_json::to_writer(&mut writer, &document)?;
    }

    writer.flush()?;
    info!(edges = edges.len(), path = %path.as_ref().display(), "exported edge list to JSON");
    Ok(edges.len())
}

/// Export edges in the given format
pub fn export_edges<P, V, W>(
    edges: &[WeightedEdge<V, W>],
    path: P,
    format: EdgeListFormat,
    options: &ExportOptions,
) -> ToolResult<usize>
where
    P: AsRef<Path>,
    V: Serialize,
    W: Serialize,
{
    match format {
        EdgeListFormat::Csv => export_to_csv(edges, path, options),
        EdgeListFormat::Json => export_to_json(edges, path, options),
    }
}
