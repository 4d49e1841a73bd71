//! CSV and TSV reading.

use csv::{ReaderBuilder, StringRecord};
use sheetmatch_model::{CellValue, Row, Sheet, parse_numeric_literal};

use crate::headers::name_headers;

/// Parses delimited text into a sheet.
///
/// The first non-blank record is the header row and fully blank records are
/// skipped. Records shorter than the header leave the trailing columns absent
/// from the row; extra fields beyond the header are dropped.
pub fn parse_delimited(
    text: &str,
    delimiter: u8,
    sheet_name: &str,
    infer_types: bool,
) -> Result<Sheet, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank_record(&record) {
            continue;
        }
        let Some(columns) = headers.as_ref() else {
            headers = Some(name_headers(record.iter()));
            continue;
        };
        rows.push(build_row(columns, &record, infer_types));
    }

    let mut sheet = Sheet::new(sheet_name, headers.unwrap_or_default());
    sheet.rows = rows;
    Ok(sheet)
}

fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn build_row(headers: &[String], record: &StringRecord, infer_types: bool) -> Row {
    let mut row = Row::with_capacity(headers.len());
    for (header, raw) in headers.iter().zip(record.iter()) {
        row.insert(header.as_str(), parse_cell(raw, infer_types));
    }
    row
}

/// Converts one raw field to a cell.
///
/// An empty field is [`CellValue::Empty`]. With `infer_types`, numeric
/// literals become numbers and `true`/`false` (any case) become booleans;
/// everything else stays text exactly as written.
pub fn parse_cell(raw: &str, infer_types: bool) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if infer_types {
        let trimmed = raw.trim();
        if let Some(number) = parse_numeric_literal(trimmed) {
            return CellValue::Number(number);
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }
    }
    CellValue::Text(raw.to_string())
}
