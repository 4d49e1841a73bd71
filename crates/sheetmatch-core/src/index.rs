//! Per-join lookup index.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use sheetmatch_model::{CellValue, Row};

use crate::normalize::normalize_key;

/// Normalized key to the first lookup row carrying it.
///
/// Borrowed from the lookup rows and built fresh for every join, so nothing
/// outlives the call that created it. Later rows with an already indexed key
/// are ignored (first match wins, as with a lookup formula) and rows whose key
/// normalizes to the empty string are never indexed.
#[derive(Debug)]
pub struct LookupIndex<'a> {
    entries: HashMap<String, &'a Row>,
    fuzzy: bool,
    duplicate_keys: usize,
    blank_keys: usize,
}

impl<'a> LookupIndex<'a> {
    /// Indexes `rows` by the normalized value of `key_column`.
    pub fn build(rows: &'a [Row], key_column: &str, fuzzy: bool) -> Self {
        let mut entries = HashMap::with_capacity(rows.len());
        let mut duplicate_keys = 0usize;
        let mut blank_keys = 0usize;
        for row in rows {
            let key = normalize_key(row.get(key_column), fuzzy);
            if key.is_empty() {
                blank_keys += 1;
                continue;
            }
            match entries.entry(key) {
                Entry::Occupied(_) => duplicate_keys += 1,
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
            }
        }
        Self {
            entries,
            fuzzy,
            duplicate_keys,
            blank_keys,
        }
    }

    /// Looks up an already normalized key.
    pub fn get(&self, key: &str) -> Option<&'a Row> {
        if key.is_empty() {
            return None;
        }
        self.entries.get(key).copied()
    }

    /// Normalizes a probe cell the same way the index keys were and looks it up.
    pub fn probe(&self, value: Option<&CellValue>) -> Option<&'a Row> {
        self.get(&normalize_key(value, self.fuzzy))
    }

    /// Number of distinct keys indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows skipped because their key was already indexed.
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    /// Rows skipped because their key was absent or blank.
    pub fn blank_keys(&self) -> usize {
        self.blank_keys
    }
}
