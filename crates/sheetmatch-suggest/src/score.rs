//! Header pair scoring.
//!
//! Uses Jaro-Winkler similarity on normalized names as the base, with a boost
//! for names that look like identifiers.

use rapidfuzz::distance::jaro_winkler;

/// Tokens that mark a column as an identifier.
const IDENTIFIER_TOKENS: &[&str] = &[
    "id", "key", "code", "sku", "email", "number", "no", "ref",
];

/// Boost when both names look like identifiers.
const BOTH_IDENTIFIER_BOOST: f32 = 1.15;
/// Boost when only one name looks like an identifier.
const ONE_IDENTIFIER_BOOST: f32 = 1.05;

/// Score for one left/right header pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// Final score; identifier boosts can push it above 1.0.
    pub score: f32,
    /// Normalized names are equal.
    pub identical: bool,
    /// Both names carry an identifier token.
    pub identifiers: bool,
}

/// Normalizes a header for comparison.
///
/// - Splits camelCase words (`CustomerID` becomes `customer id`)
/// - Converts to lowercase
/// - Replaces separators with spaces and collapses whitespace
pub fn normalize_name(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    let mut previous: Option<char> = None;
    for ch in raw.trim().chars() {
        if ch.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.push(ch);
        previous = Some(ch);
    }
    spaced
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\', '#'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when a normalized name contains an identifier token.
pub fn is_identifier_name(normalized: &str) -> bool {
    normalized
        .split(' ')
        .any(|token| IDENTIFIER_TOKENS.contains(&token))
}

/// Scores a pair of raw header names.
pub fn score_pair(left: &str, right: &str) -> PairScore {
    let left = normalize_name(left);
    let right = normalize_name(right);
    if left.is_empty() || right.is_empty() {
        return PairScore {
            score: 0.0,
            identical: false,
            identifiers: false,
        };
    }

    let identical = left == right;
    let base = if identical {
        1.0
    } else {
        jaro_winkler::similarity(left.chars(), right.chars()) as f32
    };

    let left_id = is_identifier_name(&left);
    let right_id = is_identifier_name(&right);
    let boost = match (left_id, right_id) {
        (true, true) => BOTH_IDENTIFIER_BOOST,
        (true, false) | (false, true) => ONE_IDENTIFIER_BOOST,
        (false, false) => 1.0,
    };

    PairScore {
        score: base * boost,
        identical,
        identifiers: left_id && right_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_separators_and_camel_case() {
        assert_eq!(normalize_name("  Customer_ID "), "customer id");
        assert_eq!(normalize_name("CustomerID"), "customer id");
        assert_eq!(normalize_name("order-no."), "order no");
        assert_eq!(normalize_name("SKU"), "sku");
    }

    #[test]
    fn detects_identifier_tokens() {
        assert!(is_identifier_name("customer id"));
        assert!(is_identifier_name("email"));
        assert!(!is_identifier_name("identity"));
        assert!(!is_identifier_name("department"));
    }

    #[test]
    fn identical_identifiers_score_highest() {
        let exact = score_pair("Customer ID", "customer_id");
        let close = score_pair("Customer ID", "cust_id");
        let unrelated = score_pair("Customer ID", "Department");
        assert!(exact.identical && exact.identifiers);
        assert!(exact.score > close.score);
        assert!(close.score > unrelated.score);
    }

    #[test]
    fn blank_names_score_zero() {
        assert_eq!(score_pair("", "id").score, 0.0);
    }
}
