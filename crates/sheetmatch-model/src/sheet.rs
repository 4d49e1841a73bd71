use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::Row;

/// A named table: ordered headers plus ordered rows.
///
/// Rows are not required to carry every header; sparse rows simply lack the
/// missing columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

/// A loaded source file: one or more sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub name: String,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(name: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            name: name.into(),
            sheets,
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

/// Picks the lookup sheet when the user has not chosen one.
///
/// `same_source` tells whether both workbooks were loaded from the same file
/// or folder; workbook names alone cannot decide that. For a shared source
/// the first sheet other than the master sheet is preferred. Otherwise the
/// first sheet wins.
pub fn default_lookup_sheet<'a>(
    same_source: bool,
    master_sheet: &str,
    lookup: &'a Workbook,
) -> Option<&'a Sheet> {
    if same_source && lookup.sheets.len() > 1 {
        if let Some(other) = lookup.sheets.iter().find(|sheet| sheet.name != master_sheet) {
            return Some(other);
        }
    }
    lookup.first_sheet()
}

/// Union of the column names of `rows`, in first-seen order.
///
/// Output rows share the master columns followed by the appended ones, but
/// sparse master rows can miss columns the first row has (and vice versa), so
/// a sink needs the union rather than the first row's keys.
pub fn collect_headers<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut seen: IndexSet<&str> = IndexSet::new();
    for row in rows {
        for column in row.columns() {
            seen.insert(column);
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str) -> Sheet {
        Sheet::new(name, vec!["id".to_string()])
    }

    #[test]
    fn same_workbook_prefers_other_sheet() {
        let book = Workbook::new("book.xlsx", vec![sheet("Orders"), sheet("Customers")]);
        let picked = default_lookup_sheet(true, "Orders", &book).map(|s| s.name.as_str());
        assert_eq!(picked, Some("Customers"));
    }

    #[test]
    fn different_workbook_uses_first_sheet() {
        let lookup = Workbook::new("b", vec![sheet("first"), sheet("second")]);
        let picked = default_lookup_sheet(false, "first", &lookup).map(|s| s.name.as_str());
        assert_eq!(picked, Some("first"));
    }

    #[test]
    fn headers_union_keeps_first_seen_order() {
        let rows: Vec<Row> = vec![
            [("id", "1"), ("name", "a")].into_iter().collect(),
            [("id", "2"), ("extra", "x"), ("name", "b")].into_iter().collect(),
        ];
        assert_eq!(collect_headers(&rows), vec!["id", "name", "extra"]);
    }
}
