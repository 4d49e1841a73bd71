//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, TableSide};
use crate::Sheet;

fn default_fuzzy() -> bool {
    true
}

/// What to join and how.
///
/// Holds the key column of each table, the lookup columns to append (in
/// output order) and whether keys are compared after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub master_key: String,
    pub lookup_key: String,
    #[serde(default)]
    pub append_columns: Vec<String>,
    /// Trim, lower-case and canonicalize numbers before comparing keys.
    #[serde(default = "default_fuzzy")]
    pub fuzzy: bool,
}

impl MatchConfig {
    pub fn new(master_key: impl Into<String>, lookup_key: impl Into<String>) -> Self {
        Self {
            master_key: master_key.into(),
            lookup_key: lookup_key.into(),
            append_columns: Vec::new(),
            fuzzy: default_fuzzy(),
        }
    }

    #[must_use]
    pub fn with_append_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Checks the configuration against the two sheets it will run on.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a blank key name, a key column that
    /// is not a header of its sheet, an empty append list, or an append
    /// column the lookup sheet does not have.
    pub fn validate(&self, master: &Sheet, lookup: &Sheet) -> Result<()> {
        check_key(&self.master_key, TableSide::Master, master)?;
        check_key(&self.lookup_key, TableSide::Lookup, lookup)?;
        if self.append_columns.is_empty() {
            return Err(ConfigError::NoAppendColumns);
        }
        if let Some(column) = self
            .append_columns
            .iter()
            .find(|column| !lookup.has_column(column))
        {
            return Err(ConfigError::AppendColumnNotFound {
                column: column.clone(),
                sheet: lookup.name.clone(),
            });
        }
        Ok(())
    }
}

fn check_key(key: &str, side: TableSide, sheet: &Sheet) -> Result<()> {
    if key.trim().is_empty() {
        return Err(ConfigError::MissingKey { side });
    }
    if !sheet.has_column(key) {
        return Err(ConfigError::KeyColumnNotFound {
            side,
            column: key.to_string(),
            sheet: sheet.name.clone(),
        });
    }
    Ok(())
}
