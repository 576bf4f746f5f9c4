use crate::query::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One raw execution row as produced by an agent run, before any
/// canonicalization. The tool columns are free text straight from the
/// result tables (comma-separated names, optionally wrapped in a
/// bracketed list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Which agent architecture produced this row
    #[serde(rename = "agent")]
    pub agent_name: String,
    /// Query identifier or verbatim query text
    #[serde(rename = "query")]
    pub query_ref: String,
    /// Free-text list of invoked tool names
    #[serde(default)]
    pub tools: Option<String>,
    /// Free-text list of invoked tools that did not complete successfully
    #[serde(default)]
    pub failed_tools: Option<String>,
}

impl RawRecord {
    pub fn new(
        agent_name: impl Into<String>,
        query_ref: impl Into<String>,
        tools: Option<&str>,
        failed_tools: Option<&str>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            query_ref: query_ref.into(),
            tools: tools.map(String::from),
            failed_tools: failed_tools.map(String::from),
        }
    }
}

/// One agent's normalized attempt at one query.
///
/// Invariant: `failed_tools` is a subset of `actual_tools`. The
/// normalizer rejects rows that violate it, so the effective tool set
/// can always be derived instead of stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub agent_name: String,
    pub query_id: String,
    /// Difficulty recovered from the ground-truth join
    pub difficulty: Difficulty,
    /// Canonical set of tools the agent invoked (Tact)
    pub actual_tools: BTreeSet<String>,
    /// Subset of `actual_tools` whose invocation failed
    pub failed_tools: BTreeSet<String>,
}

impl RunRecord {
    /// Tools credited as "used" for scoring: invoked minus failed.
    pub fn effective_tools(&self) -> BTreeSet<String> {
        self.actual_tools
            .difference(&self.failed_tools)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_tools_subtracts_failed() {
        let record = RunRecord {
            agent_name: "react".to_string(),
            query_id: "q1".to_string(),
            difficulty: Difficulty::Easy,
            actual_tools: ["search_web".to_string(), "time_now".to_string()]
                .into_iter()
                .collect(),
            failed_tools: ["time_now".to_string()].into_iter().collect(),
        };
        let effective = record.effective_tools();
        assert_eq!(effective.len(), 1);
        assert!(effective.contains("search_web"));
    }
}
