//! Key normalization.
//!
//! Exact mode compares the plain string coercion of a cell, the same way a
//! spreadsheet lookup formula compares cell text. Fuzzy mode additionally
//! trims, lower-cases and canonicalizes numeric-looking keys so that
//! `" 123 "`, `"123.0"` and the number `123` all meet on `"123"`.
//!
//! Canonicalizing numbers is lossy for identifier-style values with leading
//! zeros: `"007"` and `"7"` are the same key in fuzzy mode.

pub use sheetmatch_model::parse_numeric_literal;
use sheetmatch_model::{CellValue, format_number};

/// Maps a cell to the string it is compared by.
///
/// `None` stands for a cell the row does not have. It, an empty cell and (in
/// fuzzy mode) a whitespace-only cell all normalize to the empty string,
/// which the join never matches on.
///
/// Total and deterministic: every input maps to exactly one key.
pub fn normalize_key(value: Option<&CellValue>, fuzzy: bool) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let text = value.to_string();
    if fuzzy { normalize_text(&text) } else { text }
}

/// Fuzzy normalization of already-coerced text.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_numeric_literal(trimmed) {
        Some(number) => format_number(number),
        None => trimmed.to_lowercase(),
    }
}
