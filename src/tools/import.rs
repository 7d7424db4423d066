/// Edge list import utilities
///
/// Supports importing weighted edge lists from:
/// - CSV files with a `tail,head,weight` header
/// - JSON files holding an `edges` array
///
/// Vertex identifiers are read as strings and weights as `f64`.

use super::{EdgeListFormat, ToolError, ToolResult};
use crate::types::WeightedEdge;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Import options
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Skip invalid rows instead of failing
    pub skip_errors: bool,
    /// Progress log interval (imported edges), 0 disables progress logging
    pub progress_interval: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            skip_errors: false,
            progress_interval: 10000,
        }
    }
}

/// Import statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub edges_imported: usize,
    pub edges_skipped: usize,
    pub errors: Vec<String>,
}

/// Edges read from a file, in file order
#[derive(Debug, Clone)]
pub struct ImportedEdges {
    pub edges: Vec<WeightedEdge<String, f64>>,
    pub stats: ImportStats,
}

/// CSV edge row
#[derive(Debug, Deserialize)]
struct CsvEdge {
    tail: String,
    head: String,
    weight: f64,
}

/// JSON edge list document
#[derive(Debug, Deserialize)]
struct JsonEdgeList {
    edges: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct JsonEdge {
    #[serde(deserialize_with = "vertex_name")]
    tail: String,
    #[serde(deserialize_with = "vertex_name")]
    head: String,
    weight: f64,
}

/// Accept JSON strings and numbers as vertex identifiers
fn vertex_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(name) => Ok(name),
        JsonValue::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "vertex must be a string or a number, got {}",
            other
        ))),
    }
}

/// Accumulates accepted edges and applies the skip policy to bad rows
struct EdgeCollector<'a> {
    options: &'a ImportOptions,
    edges: Vec<WeightedEdge<String, f64>>,
    stats: ImportStats,
}

impl<'a> EdgeCollector<'a> {
    fn new(options: &'a ImportOptions) -> Self {
        Self {
            options,
            edges: Vec::new(),
            stats: ImportStats::default(),
        }
    }

    fn accept(&mut self, row: usize, tail: String, head: String, weight: f64) -> ToolResult<()> {
        if !weight.is_finite() {
            return self.reject(
                row,
                ToolError::InvalidFormat(format!("weight {} of edge {} -> {} is not finite", weight, tail, head)),
            );
        }

        self.edges.push(WeightedEdge::new(tail, head, weight));
        self.stats.edges_imported += 1;

        if self.progress_due() {
            info!("Imported {} edges...", self.stats.edges_imported);
        }
        Ok(())
    }

    /// Progress is reported every `progress_interval` imported edges
    fn progress_due(&self) -> bool {
        let interval = self.options.progress_interval;
        interval > 0 && self.stats.edges_imported > 0 && self.stats.edges_imported % interval == 0
    }

    fn reject(&mut self, row: usize, error: ToolError) -> ToolResult<()> {
        if !self.options.skip_errors {
            return Err(error);
        }

        warn!(row, %error, "skipping invalid edge");
        self.stats.edges_skipped += 1;
        self.stats.errors.push(format!("Row {}: {}", row, error));
        Ok(())
    }

    fn finish(self, path: &Path) -> ImportedEdges {
        info!(
            imported = self.stats.edges_imported,
            skipped = self.stats.edges_skipped,
            path = %path.display(),
            "import complete"
        );
        ImportedEdges {
            edges: self.edges,
            stats: self.stats,
        }
    }
}

/// Import edges from a CSV file
///
/// CSV format:
/// ```csv
/// tail,head,weight
/// 1,2,2
/// 5,1,-7
/// ```
pub fn import_from_csv<P: AsRef<Path>>(path: P, options: &ImportOptions) -> ToolResult<ImportedEdges> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut collector = EdgeCollector::new(options);

    for (row_num, result) in csv_reader.deserialize::<CsvEdge>().enumerate() {
        match result {
            Ok(edge) => collector.accept(row_num, edge.tail, edge.head, edge.weight)?,
            Err(e) => collector.reject(row_num, ToolError::CsvError(e))?,
        }
    }

    Ok(collector.finish(path))
}

/// Import edges from a JSON file
///
/// JSON format:
/// ```json
/// {
///   "edges": [
///     {"tail": 1, "head": 2, "weight": 2},
///     {"tail": "5", "head": "1", "weight": -7}
///   ]
/// }
/// ```
pub fn import_from_json<P: AsRef<Path>>(path: P, options: &ImportOptions) -> ToolResult<ImportedEdges> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let document: JsonEdgeList = serde_json::from_reader(BufReader::new(file))?;

    let mut collector = EdgeCollector::new(options);

    for (idx, value) in document.edges.into_iter().enumerate() {
        match serde_json::from_value::<JsonEdge>(value) {
            Ok(edge) => collector.accept(idx, edge.tail, edge.head, edge.weight)?,
            Err(e) => collector.reject(idx, ToolError::JsonError(e))?,
        }
    }

    Ok(collector.finish(path))
}

/// Import edges, choosing the format from the file extension
pub fn import_edges<P: AsRef<Path>>(path: P, options: &ImportOptions) -> ToolResult<ImportedEdges> {
    match EdgeListFormat::from_path(&path)? {
        EdgeListFormat::Csv => import_from_csv(path, options),
        EdgeListFormat::Json => import_from_json(path, options),
    }
}
