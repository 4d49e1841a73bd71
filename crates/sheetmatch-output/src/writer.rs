use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use sheetmatch_model::{CellValue, Row, collect_headers};
use tracing::info;

use crate::format::OutputFormat;

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes rows in the given format.
pub fn write_table<W: Write>(writer: W, rows: &[Row], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, rows, b','),
        OutputFormat::Tsv => write_csv(writer, rows, b'\t'),
        OutputFormat::Json => write_json(writer, rows),
    }
}

/// Writes rows as delimited text with a header row.
///
/// Nothing is written for an empty row set.
pub fn write_csv<W: Write>(writer: W, rows: &[Row], delimiter: u8) -> Result<()> {
    let headers = collect_headers(rows);
    if headers.is_empty() {
        return Ok(());
    }
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    out.write_record(&headers).context("write header row")?;
    for row in rows {
        let record = headers
            .iter()
            .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default());
        out.write_record(record).context("write data row")?;
    }
    out.flush().context("flush delimited output")?;
    Ok(())
}

/// Writes rows as a pretty-printed JSON array of objects.
pub fn write_json<W: Write>(mut writer: W, rows: &[Row]) -> Result<()> {
    let values: Vec<Value> = rows.iter().map(row_to_json).collect();
    serde_json::to_writer_pretty(&mut writer, &values).context("serialize JSON output")?;
    writer.write_all(b"\n").context("write JSON output")?;
    writer.flush().context("flush JSON output")?;
    Ok(())
}

/// Writes rows to a file, creating or truncating it.
pub fn write_output_file(path: &Path, rows: &[Row], format: OutputFormat) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_table(BufWriter::new(file), rows, format)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), %format, rows = rows.len(), "wrote result");
    Ok(())
}

fn row_to_json(row: &Row) -> Value {
    let mut object = Map::with_capacity(row.len());
    for (column, cell) in row {
        object.insert(column.clone(), cell_to_json(cell));
    }
    Value::Object(object)
}

/// Whole numbers are written without a fractional part.
fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(text) => Value::String(text.clone()),
        CellValue::Number(number) if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER => {
            Value::from(*number as i64)
        }
        CellValue::Number(number) => Value::from(*number),
        CellValue::Bool(flag) => Value::Bool(*flag),
        CellValue::Empty => Value::Null,
    }
}
