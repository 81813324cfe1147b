// ==========================================
// Luggage Fulfillment Tracking - Cell Coercion
// ==========================================
// Loose spreadsheet cells (string/number/bool/null, possibly absent) are
// coerced here and nowhere else. A cell that cannot be coerced yields None;
// the per-entity normalizers apply the documented defaults.
// ==========================================

use serde_json::Value;

const NO_ROWS: &[Value] = &[];

/// Top-level payload -> row slice. A payload that is not a JSON array
/// (error object, null, scalar) yields an empty slice, never an error:
/// callers treat "no data" uniformly and transport failures travel on the
/// typed error channel instead.
pub fn rows(payload: &Value) -> &[Value] {
    payload.as_array().map(Vec::as_slice).unwrap_or(NO_ROWS)
}

/// Bounds-checked positional access into one row. Non-array rows have no
/// cells at all.
pub fn cell(row: &Value, index: usize) -> Option<&Value> {
    row.as_array()?.get(index)
}

/// Coerce a cell to text: strings pass through, numbers and booleans are
/// stringified the way the sheet displays them. Trimmed-empty text counts
/// as absent.
pub fn string_cell(row: &Value, index: usize) -> Option<String> {
    string_value(cell(row, index)?)
}

/// Coerce a cell to a non-negative integer count. Negative and fractional
/// garbage counts as absent; numeric text is accepted.
pub fn u32_cell(row: &Value, index: usize) -> Option<u32> {
    u64_value(cell(row, index)?).and_then(|n| u32::try_from(n).ok())
}

/// Same coercion, full width (quantities).
pub fn u64_cell(row: &Value, index: usize) -> Option<u64> {
    u64_value(cell(row, index)?)
}

/// Keyed access for object-shaped rows (invoice lines, drive files).
pub fn string_field(row: &Value, key: &str) -> Option<String> {
    string_value(row.as_object()?.get(key)?)
}

/// Keyed non-negative integer access for object-shaped rows.
pub fn u64_field(row: &Value, key: &str) -> Option<u64> {
    u64_value(row.as_object()?.get(key)?)
}

fn string_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn u64_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Some(v)
            } else {
                // negative or fractional numbers are not valid counts
                n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)
            }
        }
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_non_array_payloads() {
        assert!(rows(&json!({"error": "timeout"})).is_empty());
        assert!(rows(&json!(null)).is_empty());
        assert!(rows(&json!("oops")).is_empty());
        assert_eq!(rows(&json!([[1], [2]])).len(), 2);
    }

    #[test]
    fn test_string_cell_coercion() {
        let row = json!(["SO-1001", 42, true, null, "   "]);
        assert_eq!(string_cell(&row, 0), Some("SO-1001".to_string()));
        assert_eq!(string_cell(&row, 1), Some("42".to_string()));
        assert_eq!(string_cell(&row, 2), Some("true".to_string()));
        assert_eq!(string_cell(&row, 3), None);
        assert_eq!(string_cell(&row, 4), None); // whitespace counts as absent
        assert_eq!(string_cell(&row, 9), None); // out of bounds
        assert_eq!(string_cell(&json!("not a row"), 0), None);
    }

    #[test]
    fn test_numeric_cell_coercion() {
        let row = json!([24, "10", -3, 2.5, "junk"]);
        assert_eq!(u32_cell(&row, 0), Some(24));
        assert_eq!(u32_cell(&row, 1), Some(10));
        assert_eq!(u32_cell(&row, 2), None); // negative count is absent
        assert_eq!(u32_cell(&row, 3), None); // fractional count is absent
        assert_eq!(u32_cell(&row, 4), None);
    }

    #[test]
    fn test_object_field_access() {
        let row = json!({"QTY": 100, "PO": "PO-9", "REWORK": -5});
        assert_eq!(u64_field(&row, "QTY"), Some(100));
        assert_eq!(string_field(&row, "PO"), Some("PO-9".to_string()));
        assert_eq!(u64_field(&row, "REWORK"), None);
        assert_eq!(u64_field(&row, "MISSING"), None);
    }
}
