use crate::error::{EvalError, EvalResult};
use std::collections::BTreeMap;
use teval_types::Query;
use tracing::debug;

/// Immutable lookup from a query key to its expected tool set and
/// difficulty label.
///
/// Built once at load time. Duplicate keys with byte-identical entries
/// are deduped; duplicates that disagree on the tool set or the
/// difficulty fail construction, since silently picking one entry
/// would corrupt every downstream metric without signal.
#[derive(Debug, Clone)]
pub struct GroundTruthIndex {
    queries: BTreeMap<String, Query>,
}

impl GroundTruthIndex {
    /// Builds the index, rejecting conflicting duplicate keys with
    /// `AmbiguousGroundTruth`.
    pub fn from_queries(queries: impl IntoIterator<Item = Query>) -> EvalResult<Self> {
        let mut index: BTreeMap<String, Query> = BTreeMap::new();
        for query in queries {
            let key = query.id.trim().to_string();
            match index.get(&key) {
                None => {
                    index.insert(key, query);
                }
                Some(existing) => {
                    if existing.required_tools != query.required_tools {
                        return Err(EvalError::ambiguous(
                            key,
                            format!(
                                "conflicting required tool sets {:?} vs {:?}",
                                existing.required_tools, query.required_tools
                            ),
                        ));
                    }
                    if existing.difficulty != query.difficulty {
                        return Err(EvalError::ambiguous(
                            key,
                            format!(
                                "conflicting difficulty labels {} vs {}",
                                existing.difficulty, query.difficulty
                            ),
                        ));
                    }
                    debug!(key = %key, "Deduplicated identical ground-truth entry");
                }
            }
        }
        Ok(Self { queries: index })
    }

    /// Resolves a query reference to its ground-truth entry, or
    /// `UnknownQuery` if the key is absent.
    pub fn lookup(&self, query_ref: &str) -> EvalResult<&Query> {
        let key = query_ref.trim();
        self.queries
            .get(key)
            .ok_or_else(|| EvalError::unknown_query(key))
    }

    /// Number of distinct queries in the index.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Iterates queries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.queries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teval_types::Difficulty;

    fn query(id: &str, difficulty: Difficulty, tools: &[&str]) -> Query {
        Query::new(id, id, difficulty, tools.iter().map(|t| t.to_string()))
    }

    #[test]
    fn test_lookup_resolves_known_queries_and_trims_whitespace() {
        let index = GroundTruthIndex::from_queries([query(
            "q1",
            Difficulty::Easy,
            &["search_web"],
        )])
        .unwrap();
        assert_eq!(index.len(), 1);
        let found = index.lookup("  q1 ").unwrap();
        assert_eq!(found.difficulty, Difficulty::Easy);
        assert!(found.required_tools.contains("search_web"));
    }

    #[test]
    fn test_lookup_fails_for_absent_query() {
        let index =
            GroundTruthIndex::from_queries([query("q1", Difficulty::Easy, &[])]).unwrap();
        let err = index.lookup("q2").unwrap_err();
        assert!(matches!(err, EvalError::UnknownQuery(_)));
    }

    #[test]
    fn test_identical_duplicates_are_deduped() {
        let index = GroundTruthIndex::from_queries([
            query("q1", Difficulty::Hard, &["listing_symbol"]),
            query("q1", Difficulty::Hard, &["listing_symbol"]),
        ])
        .unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_conflicting_tool_sets_fail_construction() {
        let err = GroundTruthIndex::from_queries([
            query("q1", Difficulty::Easy, &["search_web"]),
            query("q1", Difficulty::Easy, &["time_now"]),
        ])
        .unwrap_err();
        assert!(matches!(err, EvalError::AmbiguousGroundTruth { .. }));
    }

    #[test]
    fn test_conflicting_difficulty_fails_construction() {
        let err = GroundTruthIndex::from_queries([
            query("q1", Difficulty::Easy, &["search_web"]),
            query("q1", Difficulty::Hard, &["search_web"]),
        ])
        .unwrap_err();
        assert!(matches!(err, EvalError::AmbiguousGroundTruth { .. }));
    }
}
