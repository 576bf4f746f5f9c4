use std::cmp::Ordering;
use strum::IntoEnumIterator;
use teval_types::{DifficultyGroup, MetricName, MetricRanking, RankingEntry, SummaryRow};

/// Builds the cross-agent ranking for one metric from the "overall"
/// summary rows.
///
/// Agents are sorted by metric value descending with agent name
/// ascending as the deterministic tie-break, so the output never
/// depends on input order. Ranks are dense: tied values share a rank
/// and the next distinct value's rank is one greater.
pub fn rank_by_metric(summary: &[SummaryRow], metric: MetricName) -> MetricRanking {
    let mut rows: Vec<(&str, f64)> = summary
        .iter()
        .filter(|row| row.group == DifficultyGroup::Overall)
        .map(|row| (row.agent_name.as_str(), row.metric(metric)))
        .collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut entries = Vec::with_capacity(rows.len());
    let mut rank = 0;
    let mut previous: Option<f64> = None;
    for (agent_name, value) in rows {
        if previous != Some(value) {
            rank += 1;
            previous = Some(value);
        }
        entries.push(RankingEntry {
            metric,
            agent_name: agent_name.to_string(),
            value,
            rank,
        });
    }
    MetricRanking { metric, entries }
}

/// Builds one ranking per rankable metric. Recomputed fresh on every
/// call; nothing is cached or mutated.
pub fn build_rankings(summary: &[SummaryRow]) -> Vec<MetricRanking> {
    MetricName::iter()
        .map(|metric| rank_by_metric(summary, metric))
        .collect()
}
