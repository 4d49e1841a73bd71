//! Cell values as produced by a spreadsheet reader.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::format_number;

/// A single cell.
///
/// Spreadsheet readers hand back loosely typed primitives; this closes the set
/// to the four shapes a workbook cell can take. A column that is missing from a
/// row altogether is modelled by its absence from the [`Row`](crate::Row), not
/// by [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

/// Plain string coercion of a cell.
///
/// This is the representation exact-mode key comparison works on, so it must
/// stay stable: numbers go through [`format_number`], booleans print as
/// `true`/`false` and empty cells as the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_coerces_each_variant() {
        assert_eq!(CellValue::from("Alice").to_string(), "Alice");
        assert_eq!(CellValue::from(7.0).to_string(), "7");
        assert_eq!(CellValue::from(7.25).to_string(), "7.25");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn display_keeps_text_untouched() {
        assert_eq!(CellValue::from("  Mixed Case ").to_string(), "  Mixed Case ");
    }
}
