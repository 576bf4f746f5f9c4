use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumString};

/// Difficulty stratum of a benchmark query.
///
/// The source datasets label difficulty either in English or with the
/// Vietnamese labels used by the original annotation pass, so parsing
/// accepts both spellings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Query answerable with a single, obvious tool choice
    #[strum(to_string = "easy", serialize = "dễ")]
    Easy,
    /// Query requiring multiple or non-obvious tool choices
    #[strum(to_string = "hard", serialize = "khó")]
    Hard,
}

/// A single benchmark question with its expert-labeled ground truth.
///
/// Loaded once at pipeline start and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Stable identifier; datasets keyed by query text use the text itself
    pub id: String,
    /// The natural-language question submitted to every agent
    pub text: String,
    /// Difficulty stratum used for stratified aggregation
    pub difficulty: Difficulty,
    /// The set of tools required to answer correctly (Texp); may be empty
    pub required_tools: BTreeSet<String>,
}

impl Query {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        difficulty: Difficulty,
        required_tools: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            difficulty,
            required_tools: required_tools.into_iter().collect(),
        }
    }
}
