use crate::metrics::{MetricRanking, SummaryRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A run record that could not be scored, kept alongside the valid
/// results so aggregate counts stay auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub agent_name: String,
    pub query_ref: String,
    /// Human-readable rejection reason (the stringified error)
    pub reason: String,
}

/// The terminal artifact of one evaluation run: the summary table,
/// the per-metric rankings, and the scored-vs-rejected bookkeeping
/// that ranking consumers need to judge completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    /// One row per (agent, difficulty-or-overall) with observed records
    pub summary: Vec<SummaryRow>,
    /// One ordered ranking per rankable metric
    pub rankings: Vec<MetricRanking>,
    /// Number of records that were scored
    pub scored: usize,
    /// Records rejected during normalization, with reasons
    pub rejected: Vec<RejectedRecord>,
}

impl EvaluationReport {
    /// Total number of input records, scored or not.
    pub fn total_records(&self) -> usize {
        self.scored + self.rejected.len()
    }
}
