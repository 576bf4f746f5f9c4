use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use teval_types::{Difficulty, Query, RawRecord};
use tracing::info;

/// One row of the ground-truth table as it appears on disk. The
/// difficulty label is kept as free text so both the English and the
/// source dataset's Vietnamese labels parse.
#[derive(Debug, Deserialize)]
pub struct GroundTruthRow {
    /// Stable identifier; defaults to the query text when absent
    #[serde(default)]
    pub id: Option<String>,
    pub query: String,
    pub difficulty: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Loads the ground-truth table from a YAML file into `Query` values,
/// canonicalizing tool names the same way the normalizer does for run
/// records.
pub fn load_ground_truth(path: &Path) -> Result<Vec<Query>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open ground truth file {}", path.display()))?;
    let rows: Vec<GroundTruthRow> = serde_yaml::from_reader(file)
        .with_context(|| format!("Failed to parse ground truth file {}", path.display()))?;

    let mut queries = Vec::with_capacity(rows.len());
    for row in rows {
        let difficulty = Difficulty::from_str(row.difficulty.trim()).map_err(|_| {
            anyhow::anyhow!(
                "Invalid difficulty label '{}' for query '{}'",
                row.difficulty,
                row.query
            )
        })?;
        let id = row.id.unwrap_or_else(|| row.query.clone());
        queries.push(Query::new(
            id,
            row.query,
            difficulty,
            row.tools
                .iter()
                .map(|tool| tool.trim().to_lowercase())
                .filter(|tool| !tool.is_empty()),
        ));
    }
    info!(count = queries.len(), path = %path.display(), "Loaded ground truth");
    Ok(queries)
}

/// Loads one run-record table from a YAML file. Each file holds a list
/// of raw rows; one file per agent is the usual layout, but mixed
/// files work since every row names its agent.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open records file {}", path.display()))?;
    let records: Vec<RawRecord> = serde_yaml::from_reader(file)
        .with_context(|| format!("Failed to parse records file {}", path.display()))?;
    info!(count = records.len(), path = %path.display(), "Loaded run records");
    Ok(records)
}
