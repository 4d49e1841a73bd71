//! VLOOKUP-style left join.

use sheetmatch_model::{CellValue, MatchConfig, Row, Sheet};
use tracing::{debug, info, info_span};

use crate::index::LookupIndex;

/// Written into every appended column of a master row with no match.
pub const NOT_FOUND: &str = "#N/A";

/// Appended to an append-column name the output row already has.
pub const COLLISION_SUFFIX: &str = "_matched";

/// An appended column that was written under a different name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRename {
    /// Lookup column as requested.
    pub column: String,
    /// Name it was written under in the output.
    pub target: String,
}

/// Counters collected while joining.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub master_rows: usize,
    pub lookup_rows: usize,
    /// Distinct normalized keys in the lookup index.
    pub indexed_keys: usize,
    /// Lookup rows ignored because an earlier row had the same key.
    pub duplicate_keys: usize,
    /// Lookup rows ignored because their key was absent or blank.
    pub blank_lookup_keys: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Zero-based positions of the master rows that found no lookup row.
    pub unmatched_rows: Vec<usize>,
    /// Distinct collision renames, in first-seen order.
    pub renamed_columns: Vec<ColumnRename>,
}

impl JoinStats {
    /// Share of master rows that found a lookup row (0.0 for an empty master).
    pub fn match_rate(&self) -> f64 {
        if self.master_rows == 0 {
            0.0
        } else {
            self.matched as f64 / self.master_rows as f64
        }
    }
}

/// Output rows plus the statistics of the join that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    pub rows: Vec<Row>,
    pub stats: JoinStats,
}

/// Left-joins `lookup` onto `master`.
///
/// Every master row yields exactly one output row, in master order: a copy
/// of the master row followed by one cell per entry of `append_columns`.
/// A matched row receives the lookup row's values (a lookup row lacking a
/// requested column contributes [`CellValue::Empty`]); an unmatched row
/// receives [`NOT_FOUND`] in every appended column. When the row already
/// has a column of the requested name, the value goes to
/// `<name>_matched` instead of overwriting it.
///
/// Never fails: unknown key columns simply make every key absent, and no
/// row matches on an absent or blank key.
pub fn join<S: AsRef<str>>(
    master: &[Row],
    lookup: &[Row],
    master_key: &str,
    lookup_key: &str,
    append_columns: &[S],
    fuzzy: bool,
) -> Vec<Row> {
    join_with_stats(master, lookup, master_key, lookup_key, append_columns, fuzzy).rows
}

/// Same as [`join`], also reporting how the rows matched.
pub fn join_with_stats<S: AsRef<str>>(
    master: &[Row],
    lookup: &[Row],
    master_key: &str,
    lookup_key: &str,
    append_columns: &[S],
    fuzzy: bool,
) -> JoinOutcome {
    let index = LookupIndex::build(lookup, lookup_key, fuzzy);
    debug!(
        lookup_rows = lookup.len(),
        indexed_keys = index.len(),
        duplicate_keys = index.duplicate_keys(),
        blank_keys = index.blank_keys(),
        "lookup index built"
    );

    let mut stats = JoinStats {
        master_rows: master.len(),
        lookup_rows: lookup.len(),
        indexed_keys: index.len(),
        duplicate_keys: index.duplicate_keys(),
        blank_lookup_keys: index.blank_keys(),
        ..JoinStats::default()
    };

    let mut rows = Vec::with_capacity(master.len());
    for (position, master_row) in master.iter().enumerate() {
        let matched = index.probe(master_row.get(master_key));
        if matched.is_some() {
            stats.matched += 1;
        } else {
            stats.unmatched += 1;
            stats.unmatched_rows.push(position);
        }
        rows.push(build_row(
            master_row,
            matched,
            append_columns,
            &mut stats.renamed_columns,
        ));
    }

    debug!(
        master_rows = stats.master_rows,
        matched = stats.matched,
        unmatched = stats.unmatched,
        "master rows probed"
    );
    JoinOutcome { rows, stats }
}

/// Runs a join described by `config` over two sheets.
///
/// The configuration is expected to have passed [`MatchConfig::validate`];
/// an invalid one still produces a full (unmatched) result.
pub fn run_match(config: &MatchConfig, master: &Sheet, lookup: &Sheet) -> JoinOutcome {
    let span = info_span!(
        "join",
        master = %master.name,
        lookup = %lookup.name,
        fuzzy = config.fuzzy
    );
    let _guard = span.enter();
    let outcome = join_with_stats(
        &master.rows,
        &lookup.rows,
        &config.master_key,
        &config.lookup_key,
        &config.append_columns,
        config.fuzzy,
    );
    info!(
        matched = outcome.stats.matched,
        unmatched = outcome.stats.unmatched,
        renamed = outcome.stats.renamed_columns.len(),
        "join complete"
    );
    outcome
}

/// Output column for `column`, given the row built so far.
///
/// Checked against the row under construction, so a name requested twice is
/// written once under its own name and once with the suffix.
pub fn target_column(row: &Row, column: &str) -> String {
    if row.contains_column(column) {
        format!("{column}{COLLISION_SUFFIX}")
    } else {
        column.to_string()
    }
}

fn build_row<S: AsRef<str>>(
    master_row: &Row,
    matched: Option<&Row>,
    append_columns: &[S],
    renames: &mut Vec<ColumnRename>,
) -> Row {
    let mut row = master_row.clone();
    for column in append_columns {
        let column = column.as_ref();
        let target = target_column(&row, column);
        if target != column {
            record_rename(renames, column, &target);
        }
        let value = match matched {
            Some(lookup_row) => lookup_row.get(column).cloned().unwrap_or_default(),
            None => CellValue::from(NOT_FOUND),
        };
        row.insert(target, value);
    }
    row
}

fn record_rename(renames: &mut Vec<ColumnRename>, column: &str, target: &str) {
    let seen = renames
        .iter()
        .any(|rename| rename.column == column && rename.target == target);
    if !seen {
        renames.push(ColumnRename {
            column: column.to_string(),
            target: target.to_string(),
        });
    }
}
