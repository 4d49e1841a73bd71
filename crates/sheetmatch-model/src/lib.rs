//! Data model for sheetmatch: cells, rows, sheets and match configuration.

pub mod cell;
pub mod config;
pub mod error;
pub mod number;
pub mod row;
pub mod sheet;

pub use cell::CellValue;
pub use config::MatchConfig;
pub use error::{ConfigError, Result, TableSide};
pub use number::{format_number, parse_numeric_literal};
pub use row::Row;
pub use sheet::{Sheet, Workbook, collect_headers, default_lookup_sheet};
