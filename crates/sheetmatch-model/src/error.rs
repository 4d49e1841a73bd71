//! Configuration errors raised before a join is attempted.

use std::fmt;

use thiserror::Error;

/// Which of the two tables a configuration problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    Master,
    Lookup,
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Master => f.write_str("master"),
            Self::Lookup => f.write_str("lookup"),
        }
    }
}

/// Reasons a match configuration cannot be run.
///
/// The join engine itself never produces these; they are raised by the
/// calling layer so an incomplete configuration is blocked up front.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no {side} key column selected")]
    MissingKey { side: TableSide },

    #[error("{side} key column '{column}' not found in sheet '{sheet}'")]
    KeyColumnNotFound {
        side: TableSide,
        column: String,
        sheet: String,
    },

    #[error("no lookup columns selected to append")]
    NoAppendColumns,

    #[error("append column '{column}' not found in lookup sheet '{sheet}'")]
    AppendColumnNotFound { column: String, sheet: String },

    #[error("sheet '{sheet}' not found in '{workbook}'")]
    SheetNotFound { sheet: String, workbook: String },

    #[error("'{workbook}' contains no sheets")]
    EmptyWorkbook { workbook: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
