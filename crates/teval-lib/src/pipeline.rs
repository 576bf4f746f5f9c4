use crate::aggregator::Accumulator;
use crate::calculator::score_record;
use crate::ground_truth::GroundTruthIndex;
use crate::normalizer::normalize_record;
use crate::ranking::build_rankings;
use chrono::Utc;
use teval_types::{EvaluationReport, RawRecord, RejectedRecord};
use tracing::{debug, info, warn};

/// Runs the full evaluation pass: Normalize → Score → Aggregate → Rank.
///
/// Ground truth is already loaded; `GroundTruthIndex::from_queries`
/// fails fast on ambiguous entries before this point. Per-record
/// errors (unknown query, malformed row) reject only that record and
/// are carried in the report, so one bad row never aborts the run and
/// the scored-vs-rejected counts stay auditable.
pub fn evaluate(index: &GroundTruthIndex, raw_records: &[RawRecord]) -> EvaluationReport {
    let mut accumulator = Accumulator::new();
    let mut scored = 0;
    let mut rejected = Vec::new();

    for raw in raw_records {
        match normalize_record(raw, index) {
            Ok(record) => {
                // The lookup cannot fail here: normalization resolved it.
                if let Ok(query) = index.lookup(&record.query_id) {
                    let result = score_record(&record, &query.required_tools);
                    debug!(
                        agent = %result.agent_name,
                        query = %result.query_id,
                        f1 = result.scores.f1,
                        "Scored record"
                    );
                    accumulator.fold(&result);
                    scored += 1;
                }
            }
            Err(error) => {
                warn!(agent = %raw.agent_name, query = %raw.query_ref, %error, "Rejected record");
                rejected.push(RejectedRecord {
                    agent_name: raw.agent_name.trim().to_string(),
                    query_ref: raw.query_ref.trim().to_string(),
                    reason: error.to_string(),
                });
            }
        }
    }

    let summary = accumulator.finalize();
    let rankings = build_rankings(&summary);
    info!(
        scored,
        rejected = rejected.len(),
        agents = summary
            .iter()
            .filter(|row| row.group == teval_types::DifficultyGroup::Overall)
            .count(),
        "Evaluation finished"
    );

    EvaluationReport {
        generated_at: Utc::now(),
        summary,
        rankings,
        scored,
        rejected,
    }
}
