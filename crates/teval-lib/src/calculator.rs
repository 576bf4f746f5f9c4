use std::collections::BTreeSet;
use teval_types::{MetricResult, RunRecord, SetScores};

/// Computes the set-theoretic scores for one attempt: the required
/// tool set (Texp) against the effective tool set (Tact).
///
/// Pure and order-independent; the zero-denominator cases are explicit
/// branches rather than an ambient floating-point convention:
/// - precision is 1.0 when both sets are empty (correct by vacuity)
///   and 0.0 when tools were required but none called,
/// - recall is 1.0 whenever nothing was required,
/// - over/under-selection are 0.0 on an empty denominator.
pub fn set_scores(required: &BTreeSet<String>, effective: &BTreeSet<String>) -> SetScores {
    let overlap = required.intersection(effective).count() as f64;
    let n_required = required.len();
    let n_effective = effective.len();

    let accuracy = if effective == required { 1.0 } else { 0.0 };

    let precision = if n_effective == 0 {
        if n_required == 0 {
            1.0
        } else {
            0.0
        }
    } else {
        overlap / n_effective as f64
    };

    let recall = if n_required == 0 {
        1.0
    } else {
        overlap / n_required as f64
    };

    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    let over_selection = if n_effective == 0 {
        0.0
    } else {
        effective.difference(required).count() as f64 / n_effective as f64
    };

    let under_selection = if n_required == 0 {
        0.0
    } else {
        required.difference(effective).count() as f64 / n_required as f64
    };

    SetScores {
        accuracy,
        precision,
        recall,
        f1,
        over_selection,
        under_selection,
    }
}

/// Scores one normalized record against its ground truth, carrying
/// the grouping keys and the tool-failure flags through for the
/// aggregator.
pub fn score_record(record: &RunRecord, required: &BTreeSet<String>) -> MetricResult {
    let effective = record.effective_tools();
    MetricResult {
        agent_name: record.agent_name.clone(),
        query_id: record.query_id.clone(),
        difficulty: record.difficulty,
        scores: set_scores(required, &effective),
        invoked_tools: !record.actual_tools.is_empty(),
        had_failed_tools: !record.failed_tools.is_empty(),
    }
}
