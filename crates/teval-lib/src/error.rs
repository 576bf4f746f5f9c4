use thiserror::Error;

/// Errors that can occur while building ground truth or scoring records.
///
/// `AmbiguousGroundTruth` is fatal at load time; the per-record
/// variants are accumulated into the evaluation report instead of
/// aborting the run.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A run record references a query absent from ground truth
    #[error("unknown query '{0}': not present in ground truth")]
    UnknownQuery(String),

    /// Ground truth has conflicting entries for one query key
    #[error("ambiguous ground truth for query '{key}': {reason}")]
    AmbiguousGroundTruth { key: String, reason: String },

    /// A run record cannot be parsed into canonical tool sets
    #[error("malformed record for agent '{agent}' on query '{query}': {reason}")]
    MalformedRecord {
        agent: String,
        query: String,
        reason: String,
    },
}

impl EvalError {
    /// Create a new unknown-query error
    pub fn unknown_query(query: impl Into<String>) -> Self {
        Self::UnknownQuery(query.into())
    }

    /// Create a new ambiguous-ground-truth error
    pub fn ambiguous(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AmbiguousGroundTruth {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a new malformed-record error
    pub fn malformed(
        agent: impl Into<String>,
        query: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            agent: agent.into(),
            query: query.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;
