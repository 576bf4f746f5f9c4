//! Tool-selection evaluation engine.
//!
//! Scores the tool invocations of multiple agent architectures against
//! a labeled ground truth and derives per-difficulty summary tables
//! and cross-agent rankings:
//! - set-theoretic scoring of each (agent, query) attempt with
//!   explicit empty-set conventions,
//! - order-independent aggregation into per-stratum means,
//! - dense, deterministically tie-broken rankings.
//!
//! The pipeline is a single linear pass: Load → Normalize → Score →
//! Aggregate → Rank. Ambiguous ground truth aborts before scoring;
//! individual bad records are rejected and counted, never silently
//! dropped.

pub mod aggregator;
pub mod calculator;
pub mod error;
pub mod ground_truth;
pub mod normalizer;
pub mod pipeline;
pub mod ranking;

pub use aggregator::{aggregate, Accumulator};
pub use calculator::{score_record, set_scores};
pub use error::{EvalError, EvalResult};
pub use ground_truth::GroundTruthIndex;
pub use normalizer::{canonical_tool_set, normalize_record};
pub use pipeline::evaluate;
pub use ranking::{build_rankings, rank_by_metric};
