//! JSON array-of-objects reading.

use indexmap::IndexSet;
use serde_json::Value;
use sheetmatch_model::{CellValue, Row, Sheet};

/// Builds a sheet from a JSON document.
///
/// The document must be an array of objects. Headers are the union of object
/// keys in first-seen order. Nested arrays and objects are kept as their JSON
/// text.
pub fn sheet_from_json(sheet_name: &str, value: Value) -> Result<Sheet, String> {
    let Value::Array(items) = value else {
        return Err("top level must be an array of objects".to_string());
    };

    let mut headers: IndexSet<String> = IndexSet::new();
    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(format!("element {index} is not an object"));
        };
        let mut row = Row::with_capacity(fields.len());
        for (column, value) in fields {
            headers.insert(column.clone());
            row.insert(column, cell_from_json(value));
        }
        rows.push(row);
    }

    let mut sheet = Sheet::new(sheet_name, headers.into_iter().collect());
    sheet.rows = rows;
    Ok(sheet)
}

fn cell_from_json(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(flag) => CellValue::Bool(flag),
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| CellValue::Text(number.to_string()), CellValue::Number),
        Value::String(text) if text.is_empty() => CellValue::Empty,
        Value::String(text) => CellValue::Text(text),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn union_of_keys_in_first_seen_order() {
        let doc = json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "dept": "Sales", "tags": ["a", "b"], "gone": null}
        ]);
        let sheet = sheet_from_json("people", doc).expect("sheet");
        assert_eq!(sheet.headers, vec!["id", "name", "dept", "tags", "gone"]);
        assert_eq!(sheet.rows[0].get("dept"), None);
        assert_eq!(sheet.rows[1].get("id"), Some(&CellValue::Number(2.0)));
        assert_eq!(
            sheet.rows[1].get("tags"),
            Some(&CellValue::from(r#"["a","b"]"#))
        );
        assert_eq!(sheet.rows[1].get("gone"), Some(&CellValue::Empty));
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(sheet_from_json("x", json!({"id": 1})).is_err());
        let err = sheet_from_json("x", json!([{"id": 1}, 5])).unwrap_err();
        assert_eq!(err, "element 1 is not an object");
    }
}
