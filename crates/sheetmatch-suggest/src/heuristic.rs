use tracing::debug;

use crate::score::{PairScore, score_pair};
use crate::{KeySuggester, KeySuggestion};

/// Default minimum pair score for a suggestion.
pub const DEFAULT_MIN_SCORE: f32 = 0.80;

/// Offline suggester that compares header names.
///
/// Every left/right header pair is scored with [`score_pair`]; the best pair
/// at or above `min_score` wins. Ties keep the earliest pair in header order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicSuggester {
    min_score: f32,
}

impl Default for HeuristicSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

impl HeuristicSuggester {
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }

    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    fn best_pair<'a>(
        &self,
        left_headers: &'a [String],
        right_headers: &'a [String],
    ) -> Option<(&'a str, &'a str, PairScore)> {
        let mut best: Option<(&str, &str, PairScore)> = None;
        for left in left_headers {
            for right in right_headers {
                let score = score_pair(left, right);
                if score.score < self.min_score {
                    continue;
                }
                if best.is_none_or(|(_, _, current)| score.score > current.score) {
                    best = Some((left.as_str(), right.as_str(), score));
                }
            }
        }
        best
    }
}

impl KeySuggester for HeuristicSuggester {
    fn suggest(
        &self,
        left_label: &str,
        left_headers: &[String],
        right_label: &str,
        right_headers: &[String],
    ) -> Option<KeySuggestion> {
        let Some((left, right, score)) = self.best_pair(left_headers, right_headers) else {
            debug!(
                left = left_label,
                right = right_label,
                min_score = self.min_score,
                "no key pair scored high enough"
            );
            return None;
        };

        debug!(
            left = left_label,
            right = right_label,
            score = score.score,
            "suggested key pair"
        );
        Some(KeySuggestion {
            left_key: left.to_string(),
            right_key: right.to_string(),
            reasoning: reasoning(left_label, right_label, &score),
        })
    }
}

fn reasoning(left_label: &str, right_label: &str, score: &PairScore) -> String {
    let names = if score.identical {
        "have the same name"
    } else {
        "have similar names"
    };
    let kind = if score.identifiers {
        " and both look like identifiers"
    } else {
        ""
    };
    format!(
        "The key columns in '{left_label}' and '{right_label}' {names}{kind} ({:.0}% match).",
        score.score.min(1.0) * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn picks_matching_identifier_columns() {
        let suggestion = HeuristicSuggester::default()
            .suggest(
                "orders.csv",
                &headers(&["Order Date", "Customer ID", "Amount"]),
                "customers.csv",
                &headers(&["customer_id", "Name", "Region"]),
            )
            .expect("suggestion");
        assert_eq!(suggestion.left_key, "Customer ID");
        assert_eq!(suggestion.right_key, "customer_id");
        assert!(suggestion.reasoning.contains("same name"));
    }

    #[test]
    fn prefers_identifier_over_plain_similarity() {
        let suggestion = HeuristicSuggester::default()
            .suggest(
                "left",
                &headers(&["Notes", "SKU"]),
                "right",
                &headers(&["Notes", "sku"]),
            )
            .expect("suggestion");
        assert_eq!(suggestion.left_key, "SKU");
        assert_eq!(suggestion.right_key, "sku");
    }

    #[test]
    fn none_for_empty_or_unrelated_headers() {
        let suggester = HeuristicSuggester::default();
        assert_eq!(suggester.suggest("l", &[], "r", &headers(&["id"])), None);
        assert_eq!(
            suggester.suggest("l", &headers(&["alpha"]), "r", &headers(&["zzz"])),
            None
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = HeuristicSuggester::new(2.0);
        assert_eq!(
            strict.suggest("l", &headers(&["id"]), "r", &headers(&["id"])),
            None
        );
    }
}
