use std::path::PathBuf;

use sheetmatch_core::JoinOutcome;
use sheetmatch_model::{MatchConfig, Sheet, Workbook};
use sheetmatch_output::OutputFormat;
use sheetmatch_suggest::KeySuggestion;

/// Which sheet of which source a table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub workbook: String,
    pub sheet: String,
    pub rows: usize,
    pub columns: usize,
}

impl SheetRef {
    pub fn new(book: &Workbook, sheet: &Sheet) -> Self {
        Self {
            workbook: book.name.clone(),
            sheet: sheet.name.clone(),
            rows: sheet.row_count(),
            columns: sheet.headers.len(),
        }
    }
}

#[derive(Debug)]
pub struct JoinReport {
    pub master: SheetRef,
    pub lookup: SheetRef,
    pub config: MatchConfig,
    pub outcome: JoinOutcome,
    /// Written result file; `None` for a dry run.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// Suggestion used to fill missing keys, if any.
    pub suggestion: Option<KeySuggestion>,
}

impl JoinReport {
    pub fn has_unmatched(&self) -> bool {
        self.outcome.stats.unmatched > 0
    }
}

#[derive(Debug)]
pub struct SuggestReport {
    pub master: SheetRef,
    pub lookup: SheetRef,
    pub suggestion: Option<KeySuggestion>,
}
