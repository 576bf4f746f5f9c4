use std::collections::BTreeMap;
use teval_types::{DifficultyGroup, MetricResult, SummaryRow};

/// Running totals for one (agent, group) cell.
#[derive(Debug, Default, Clone, PartialEq)]
struct GroupTotals {
    count: usize,
    accuracy: f64,
    precision: f64,
    recall: f64,
    f1: f64,
    over_selection: f64,
    under_selection: f64,
    /// Records that invoked at least one tool
    invoked: usize,
    /// Records with at least one failed invocation
    failed: usize,
}

impl GroupTotals {
    fn fold(&mut self, result: &MetricResult) {
        self.count += 1;
        self.accuracy += result.scores.accuracy;
        self.precision += result.scores.precision;
        self.recall += result.scores.recall;
        self.f1 += result.scores.f1;
        self.over_selection += result.scores.over_selection;
        self.under_selection += result.scores.under_selection;
        if result.invoked_tools {
            self.invoked += 1;
        }
        if result.had_failed_tools {
            self.failed += 1;
        }
    }

    fn merge(&mut self, other: &GroupTotals) {
        self.count += other.count;
        self.accuracy += other.accuracy;
        self.precision += other.precision;
        self.recall += other.recall;
        self.f1 += other.f1;
        self.over_selection += other.over_selection;
        self.under_selection += other.under_selection;
        self.invoked += other.invoked;
        self.failed += other.failed;
    }

    fn finalize(&self, agent_name: String, group: DifficultyGroup) -> SummaryRow {
        let n = self.count as f64;
        SummaryRow {
            agent_name,
            group,
            count: self.count,
            accuracy: self.accuracy / n,
            precision: self.precision / n,
            recall: self.recall / n,
            f1: self.f1 / n,
            over_selection: self.over_selection / n,
            under_selection: self.under_selection / n,
            tool_fail_rate: if self.invoked == 0 {
                0.0
            } else {
                self.failed as f64 / self.invoked as f64
            },
        }
    }
}

/// Accumulator folding per-record metric results into per-(agent,
/// difficulty) and per-(agent, overall) summary rows.
///
/// The lifecycle is explicit: `new` → `fold` per result → `finalize`.
/// Each evaluation run constructs its own accumulator; there is no
/// shared state between runs. The fold is commutative, so re-running
/// on a re-ordered stream yields identical rows. Parallel use folds
/// into private partials and combines them with `merge`.
#[derive(Debug, Default, Clone)]
pub struct Accumulator {
    groups: BTreeMap<(String, DifficultyGroup), GroupTotals>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one result into its difficulty stratum and the overall bucket.
    pub fn fold(&mut self, result: &MetricResult) {
        for group in [
            DifficultyGroup::from(result.difficulty),
            DifficultyGroup::Overall,
        ] {
            self.groups
                .entry((result.agent_name.clone(), group))
                .or_default()
                .fold(result);
        }
    }

    /// Combines another accumulator's partial totals into this one.
    pub fn merge(&mut self, other: Accumulator) {
        for (key, totals) in other.groups {
            self.groups.entry(key).or_default().merge(&totals);
        }
    }

    /// Produces the summary table, ordered by agent name then group.
    ///
    /// A group with zero folded records never existed in the map, so
    /// an agent with no records in a stratum is absent rather than
    /// reported as a zero row.
    pub fn finalize(self) -> Vec<SummaryRow> {
        self.groups
            .into_iter()
            .map(|((agent_name, group), totals)| totals.finalize(agent_name, group))
            .collect()
    }
}

/// Convenience wrapper: fold an entire result stream and finalize.
pub fn aggregate(results: &[MetricResult]) -> Vec<SummaryRow> {
    let mut accumulator = Accumulator::new();
    for result in results {
        accumulator.fold(result);
    }
    accumulator.finalize()
}
