//! Writing joined rows back out.
//!
//! - **CSV / TSV**: header row is the union of row columns in first-seen
//!   order; absent cells are written empty
//! - **JSON**: an array of objects with column order preserved

mod format;
mod writer;

pub use format::{DEFAULT_OUTPUT_PREFIX, OutputFormat, default_output_name};
pub use writer::{write_csv, write_json, write_output_file, write_table};
