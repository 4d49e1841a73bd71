use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetmatch_core::{JoinStats, NOT_FOUND};
use sheetmatch_model::{CellValue, Row, Workbook, collect_headers};

use crate::types::{JoinReport, SheetRef, SuggestReport};

pub fn print_join_summary(report: &JoinReport, preview: usize) {
    println!("Master: {}", describe(&report.master));
    println!("Lookup: {}", describe(&report.lookup));
    println!(
        "Keys: {} -> {} ({})",
        report.config.master_key,
        report.config.lookup_key,
        if report.config.fuzzy { "fuzzy" } else { "exact" }
    );
    if let Some(suggestion) = &report.suggestion {
        println!("Suggested keys: {}", suggestion.reasoning);
    }
    println!("{}", stats_table(&report.outcome.stats));

    for rename in &report.outcome.stats.renamed_columns {
        println!(
            "Column '{}' already exists in the master table; appended as '{}'",
            rename.column, rename.target
        );
    }

    if preview > 0 && !report.outcome.rows.is_empty() {
        let shown = preview.min(report.outcome.rows.len());
        println!();
        println!("Preview ({shown} of {} rows):", report.outcome.rows.len());
        println!("{}", preview_table(&report.outcome.rows, preview));
    }

    match &report.output {
        Some(path) => println!("Saved: {} ({})", path.display(), report.format),
        None => println!("Dry run: no file written"),
    }
}

pub fn print_workbook(book: &Workbook) {
    println!("Source: {}", book.name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Headers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in &book.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.row_count()),
            Cell::new(sheet.headers.len()),
            Cell::new(sheet.headers.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_suggestion(report: &SuggestReport) {
    println!("Master: {}", describe(&report.master));
    println!("Lookup: {}", describe(&report.lookup));
    match &report.suggestion {
        Some(suggestion) => {
            println!(
                "Suggested keys: {} -> {}",
                suggestion.left_key, suggestion.right_key
            );
            println!("{}", suggestion.reasoning);
        }
        None => println!("No key pair scored high enough to suggest."),
    }
}

/// Match statistics as a two-column table.
pub fn stats_table(stats: &JoinStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Master rows"), Cell::new(stats.master_rows)]);
    table.add_row(vec![Cell::new("Lookup rows"), Cell::new(stats.lookup_rows)]);
    table.add_row(vec![Cell::new("Distinct lookup keys"), Cell::new(stats.indexed_keys)]);
    table.add_row(vec![
        Cell::new("Duplicate keys ignored"),
        count_cell(stats.duplicate_keys, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Blank lookup keys"),
        count_cell(stats.blank_lookup_keys, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Matched"),
        Cell::new(stats.matched).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched"),
        count_cell(stats.unmatched, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Match rate")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", stats.match_rate() * 100.0)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// The first `limit` rows, with `#N/A` cells highlighted.
pub fn preview_table(rows: &[Row], limit: usize) -> Table {
    let shown = &rows[..limit.min(rows.len())];
    let headers = collect_headers(shown);
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in shown {
        table.add_row(
            headers
                .iter()
                .map(|column| value_cell(row.get(column)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

fn describe(sheet: &SheetRef) -> String {
    if sheet.workbook == sheet.sheet {
        format!("{} ({} rows)", sheet.sheet, sheet.rows)
    } else {
        format!(
            "{} / {} ({} rows, {} columns)",
            sheet.workbook, sheet.sheet, sheet.rows, sheet.columns
        )
    }
}

fn value_cell(value: Option<&CellValue>) -> Cell {
    match value {
        Some(CellValue::Text(text)) if text == NOT_FOUND => Cell::new(text)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(CellValue::Empty) | None => dim_cell(""),
        Some(value) => Cell::new(value),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
