use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use crate::CellValue;

/// One record of a sheet: column name to cell, in insertion order.
///
/// Column order is significant and survives cloning, serialization and
/// [`Row::insert`] on an existing column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the cell for `column`, or `None` when the row has no such column.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Sets a cell. An existing column keeps its position; a new one is appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, CellValue> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a CellValue);
    type IntoIter = Iter<'a, String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, CellValue>> for Row {
    fn from(cells: IndexMap<String, CellValue>) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_existing_column_keeps_position() {
        let mut row: Row = [("a", "1"), ("b", "2")].into_iter().collect();
        row.insert("a", "changed");
        row.insert("c", "3");
        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["a", "b", "c"]);
        assert_eq!(row.get("a"), Some(&CellValue::from("changed")));
    }

    #[test]
    fn absent_column_differs_from_empty_cell() {
        let row: Row = [("a", CellValue::Empty)].into_iter().collect();
        assert_eq!(row.get("a"), Some(&CellValue::Empty));
        assert_eq!(row.get("b"), None);
        assert!(row.contains_column("a"));
        assert!(!row.contains_column("b"));
    }
}
