//! Join key suggestions.
//!
//! Given the headers of both tables, a [`KeySuggester`] proposes the pair of
//! columns most likely to identify the same entity. Suggestions are advisory:
//! they only fill keys the user has not chosen.

mod heuristic;
mod score;

use serde::{Deserialize, Serialize};

pub use heuristic::{DEFAULT_MIN_SCORE, HeuristicSuggester};
pub use score::{PairScore, is_identifier_name, normalize_name, score_pair};

/// A proposed pair of key columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySuggestion {
    /// Column from the left (master) table.
    pub left_key: String,
    /// Column from the right (lookup) table.
    pub right_key: String,
    /// Short explanation of why the columns match.
    pub reasoning: String,
}

/// Something that can propose join keys from two header lists.
///
/// Implementations return `None` instead of failing.
pub trait KeySuggester {
    fn suggest(
        &self,
        left_label: &str,
        left_headers: &[String],
        right_label: &str,
        right_headers: &[String],
    ) -> Option<KeySuggestion>;
}

/// Fills unset keys from a suggestion.
///
/// A key is only filled when it is currently `None` and the suggested column
/// is one of the table's headers. Returns true if either key changed.
pub fn apply_suggestion(
    master_key: &mut Option<String>,
    lookup_key: &mut Option<String>,
    suggestion: &KeySuggestion,
    left_headers: &[String],
    right_headers: &[String],
) -> bool {
    let mut changed = false;
    if master_key.is_none() && left_headers.contains(&suggestion.left_key) {
        *master_key = Some(suggestion.left_key.clone());
        changed = true;
    }
    if lookup_key.is_none() && right_headers.contains(&suggestion.right_key) {
        *lookup_key = Some(suggestion.right_key.clone());
        changed = true;
    }
    changed
}
