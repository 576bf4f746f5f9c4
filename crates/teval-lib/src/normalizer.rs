use crate::error::{EvalError, EvalResult};
use crate::ground_truth::GroundTruthIndex;
use std::collections::BTreeSet;
use teval_types::{RawRecord, RunRecord};

/// Parses a free-text tool column into a canonical tool set.
///
/// The result tables carry either a bare comma-separated list
/// (`search_web, time_now`) or a bracketed list literal
/// (`['search_web', 'time_now']`), with arbitrary whitespace, quoting
/// and casing. Tokens are trimmed, stripped of quotes, lowercased and
/// deduped. An absent or empty column is an empty set. Returns a
/// reason string on unparseable input instead of best-effort guessing.
pub fn canonical_tool_set(raw: Option<&str>) -> Result<BTreeSet<String>, String> {
    let mut text = match raw {
        Some(text) => text.trim(),
        None => return Ok(BTreeSet::new()),
    };
    if text.is_empty() {
        return Ok(BTreeSet::new());
    }

    // Some sources quote the whole column; strip one outer pair.
    if (text.starts_with('"') && text.ends_with('"') && text.len() >= 2)
        || (text.starts_with('\'') && text.ends_with('\'') && text.len() >= 2)
    {
        text = text[1..text.len() - 1].trim();
    }

    if text.starts_with('[') {
        if !text.ends_with(']') {
            return Err(format!("unterminated tool list '{text}'"));
        }
        text = text[1..text.len() - 1].trim();
    } else if text.ends_with(']') {
        return Err(format!("unbalanced tool list '{text}'"));
    }

    let mut tools = BTreeSet::new();
    for token in text.split(',') {
        let token = token
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .trim();
        if !token.is_empty() {
            tools.insert(token.to_lowercase());
        }
    }
    Ok(tools)
}

/// Converts one raw execution row into a normalized `RunRecord`.
///
/// Difficulty is recovered via the ground-truth join. Fails with
/// `UnknownQuery` when the query reference does not resolve, and with
/// `MalformedRecord` when the row itself is unusable: empty agent or
/// query fields, an unparseable tool column, or a failed tool that was
/// never invoked (which would break the `failed ⊆ actual` invariant).
pub fn normalize_record(raw: &RawRecord, index: &GroundTruthIndex) -> EvalResult<RunRecord> {
    let agent_name = raw.agent_name.trim();
    if agent_name.is_empty() {
        return Err(EvalError::malformed(
            "<unnamed>",
            raw.query_ref.trim(),
            "empty agent name",
        ));
    }
    let query_ref = raw.query_ref.trim();
    if query_ref.is_empty() {
        return Err(EvalError::malformed(
            agent_name,
            "<empty>",
            "empty query reference",
        ));
    }

    let query = index.lookup(query_ref)?;

    let actual_tools = canonical_tool_set(raw.tools.as_deref())
        .map_err(|reason| EvalError::malformed(agent_name, query_ref, reason))?;
    let failed_tools = canonical_tool_set(raw.failed_tools.as_deref())
        .map_err(|reason| EvalError::malformed(agent_name, query_ref, reason))?;

    let unknown_failures: Vec<&String> =
        failed_tools.difference(&actual_tools).collect();
    if !unknown_failures.is_empty() {
        return Err(EvalError::malformed(
            agent_name,
            query_ref,
            format!("failed tools {unknown_failures:?} were never invoked"),
        ));
    }

    Ok(RunRecord {
        agent_name: agent_name.to_string(),
        query_id: query.id.clone(),
        difficulty: query.difficulty,
        actual_tools,
        failed_tools,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use teval_types::{Difficulty, Query};

    fn index() -> GroundTruthIndex {
        GroundTruthIndex::from_queries([Query::new(
            "q1",
            "What is the SSI price today?",
            Difficulty::Easy,
            ["stock_price".to_string(), "search_web".to_string()],
        )])
        .unwrap()
    }

    #[test]
    fn test_canonical_tool_set_normalizes_case_whitespace_and_duplicates() {
        let tools = canonical_tool_set(Some("  Search_Web , TIME_NOW,search_web ")).unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools.contains("search_web"));
        assert!(tools.contains("time_now"));
    }

    #[test]
    fn test_canonical_tool_set_accepts_bracketed_list_literals() {
        let tools = canonical_tool_set(Some("['stock_price', \"search_web\"]")).unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools.contains("stock_price"));
        assert!(tools.contains("search_web"));
    }

    #[test]
    fn test_canonical_tool_set_empty_inputs_yield_empty_set() {
        assert!(canonical_tool_set(None).unwrap().is_empty());
        assert!(canonical_tool_set(Some("")).unwrap().is_empty());
        assert!(canonical_tool_set(Some("   ")).unwrap().is_empty());
        assert!(canonical_tool_set(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn test_canonical_tool_set_rejects_unterminated_list() {
        assert!(canonical_tool_set(Some("['stock_price', 'search_web'")).is_err());
        assert!(canonical_tool_set(Some("stock_price]")).is_err());
    }

    #[test]
    fn test_normalize_record_joins_difficulty_from_ground_truth() {
        let raw = RawRecord::new("react", "q1", Some("Stock_Price, search_web"), None);
        let record = normalize_record(&raw, &index()).unwrap();
        assert_eq!(record.agent_name, "react");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.actual_tools.len(), 2);
        assert!(record.failed_tools.is_empty());
    }

    #[test]
    fn test_normalize_record_rejects_unknown_query() {
        let raw = RawRecord::new("react", "q404", Some("search_web"), None);
        let err = normalize_record(&raw, &index()).unwrap_err();
        assert!(matches!(err, EvalError::UnknownQuery(_)));
    }

    #[test]
    fn test_normalize_record_rejects_empty_agent_name() {
        let raw = RawRecord::new("  ", "q1", None, None);
        let err = normalize_record(&raw, &index()).unwrap_err();
        assert!(matches!(err, EvalError::MalformedRecord { .. }));
    }

    #[test]
    fn test_normalize_record_rejects_failed_tool_that_was_never_invoked() {
        let raw = RawRecord::new("react", "q1", Some("search_web"), Some("time_now"));
        let err = normalize_record(&raw, &index()).unwrap_err();
        assert!(matches!(err, EvalError::MalformedRecord { .. }));
    }

    #[test]
    fn test_normalize_record_keeps_failed_subset_of_actual() {
        let raw = RawRecord::new(
            "rewoo",
            "q1",
            Some("stock_price, search_web"),
            Some("SEARCH_WEB"),
        );
        let record = normalize_record(&raw, &index()).unwrap();
        assert!(record.failed_tools.contains("search_web"));
        let effective = record.effective_tools();
        assert_eq!(effective.len(), 1);
        assert!(effective.contains("stock_price"));
    }
}
