//! Loading master and lookup tables from disk.
//!
//! A source is either a single `.csv`, `.tsv`/`.tab` or `.json` file (a
//! workbook with one sheet named after the file stem) or a folder, where each
//! supported file becomes one sheet, in file-name order.

pub mod delimited;
pub mod discovery;
pub mod error;
pub mod format;
pub mod headers;
pub mod json;
pub mod source;

use std::collections::HashSet;
use std::path::Path;

use sheetmatch_model::{Sheet, Workbook};
use tracing::{debug, warn};

pub use delimited::{parse_cell, parse_delimited};
pub use discovery::list_table_files;
pub use error::{IngestError, Result};
pub use format::SourceFormat;
pub use headers::{EMPTY_HEADER, name_headers, normalize_header};
pub use json::sheet_from_json;
pub use source::{MAX_FILE_SIZE, read_text, sheet_name, workbook_name};

/// Column count above which loading logs a warning.
const WIDE_SHEET_COLUMNS: usize = 500;

/// Options for loading tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Convert numeric and boolean literals in delimited files to typed cells.
    pub infer_types: bool,
    /// Files larger than this many bytes are rejected.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            infer_types: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn with_infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Reads a single table file into a sheet named after the file stem.
pub fn read_sheet(path: &Path, options: &IngestOptions) -> Result<Sheet> {
    let format = SourceFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = read_text(path, options.max_file_size)?;
    let name = sheet_name(path);

    let sheet = match format.delimiter() {
        Some(delimiter) => parse_delimited(&text, delimiter, &name, options.infer_types)
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
        None => {
            let value = serde_json::from_str(&text).map_err(|e| IngestError::JsonParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            sheet_from_json(&name, value).map_err(|reason| IngestError::JsonShape {
                path: path.to_path_buf(),
                reason,
            })?
        }
    };

    if sheet.headers.len() > WIDE_SHEET_COLUMNS {
        warn!(
            path = %path.display(),
            columns = sheet.headers.len(),
            "sheet has an unusually large number of columns"
        );
    }
    debug!(
        path = %path.display(),
        ?format,
        rows = sheet.row_count(),
        columns = sheet.headers.len(),
        "loaded sheet"
    );
    Ok(sheet)
}

/// Reads a file or folder into a workbook.
///
/// Sheet names inside a folder are made unique with `_1`, `_2`, ... suffixes
/// when two files share a stem.
pub fn read_workbook(path: &Path, options: &IngestOptions) -> Result<Workbook> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let name = workbook_name(path);

    if !path.is_dir() {
        let sheet = read_sheet(path, options)?;
        return Ok(Workbook::new(name, vec![sheet]));
    }

    let files = list_table_files(path)?;
    if files.is_empty() {
        return Err(IngestError::NoTableFiles {
            path: path.to_path_buf(),
        });
    }

    let mut used = HashSet::new();
    let mut sheets = Vec::with_capacity(files.len());
    for file in &files {
        let mut sheet = read_sheet(file, options)?;
        sheet.name = headers::unique_name(&sheet.name, &mut used);
        sheets.push(sheet);
    }
    debug!(path = %path.display(), sheets = sheets.len(), "loaded workbook folder");
    Ok(Workbook::new(name, sheets))
}
