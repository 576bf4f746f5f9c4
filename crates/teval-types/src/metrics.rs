use crate::query::Difficulty;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The metric dimensions agents are ranked on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MetricName {
    Accuracy,
    Precision,
    Recall,
    F1,
}

/// Grouping key for aggregation: a difficulty stratum or the
/// cross-stratum "overall" bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyGroup {
    Easy,
    Hard,
    Overall,
}

impl From<Difficulty> for DifficultyGroup {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => DifficultyGroup::Easy,
            Difficulty::Hard => DifficultyGroup::Hard,
        }
    }
}

/// The set-theoretic scores for a single (agent, query) attempt.
///
/// All fields are in [0, 1]. The zero-denominator conventions are
/// explicit branches in the calculator, so no field is ever NaN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetScores {
    /// 1.0 when the effective tool set equals the required set, else 0.0
    pub accuracy: f64,
    /// |Texp ∩ Tact| / |Tact|
    pub precision: f64,
    /// |Texp ∩ Tact| / |Texp|
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
    /// Fraction of invoked tools that were not required
    pub over_selection: f64,
    /// Fraction of required tools that were not invoked
    pub under_selection: f64,
}

/// Output of scoring one normalized run record. Denormalizes the
/// grouping keys so the aggregator never has to re-join ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub agent_name: String,
    pub query_id: String,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub scores: SetScores,
    /// Whether the agent invoked any tool at all (before failure filtering)
    pub invoked_tools: bool,
    /// Whether at least one invocation failed
    pub had_failed_tools: bool,
}

/// Aggregate over all `MetricResult`s sharing (agent, group): the
/// record count and the arithmetic mean of each score field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub agent_name: String,
    pub group: DifficultyGroup,
    /// Number of records folded into this row
    pub count: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub over_selection: f64,
    pub under_selection: f64,
    /// Fraction of tool-invoking records with at least one failed call
    pub tool_fail_rate: f64,
}

impl SummaryRow {
    /// The value of a rankable metric on this row.
    pub fn metric(&self, metric: MetricName) -> f64 {
        match metric {
            MetricName::Accuracy => self.accuracy,
            MetricName::Precision => self.precision,
            MetricName::Recall => self.recall,
            MetricName::F1 => self.f1,
        }
    }
}

/// One agent's position in the ranking for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub metric: MetricName,
    pub agent_name: String,
    pub value: f64,
    /// Dense rank: tied values share a rank, the next distinct value
    /// is one greater
    pub rank: usize,
}

/// The ordered ranking for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRanking {
    pub metric: MetricName,
    pub entries: Vec<RankingEntry>,
}
