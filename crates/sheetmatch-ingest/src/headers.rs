//! Header normalization and naming.

use std::collections::HashSet;

/// Name given to a header cell that is blank.
pub const EMPTY_HEADER: &str = "__EMPTY";

/// Trims whitespace and stray BOMs and collapses inner runs of whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Turns a raw header record into unique column names.
///
/// Blank cells become `__EMPTY`, `__EMPTY_1`, ... and repeated names get
/// `_1`, `_2`, ... suffixes, the way spreadsheet readers key their rows.
pub fn name_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut used = HashSet::new();
    raw.into_iter()
        .map(|value| {
            let base = normalize_header(value.as_ref());
            let base = if base.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                base
            };
            unique_name(&base, &mut used)
        })
        .collect()
}

/// Returns `base` or the first free `base_N`, and marks it used.
pub(crate) fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut suffix = 0usize;
    while used.contains(&name) {
        suffix += 1;
        name = format!("{base}_{suffix}");
    }
    used.insert(name.clone());
    name
}
