use crate::domain::{Normalization, NormalizedRow, RawRow, SkipReason, TableSpec, Value};

pub use crate::domain::{parse_goals, qualification_tier, total_red_cards};

pub const PLACEHOLDER: &str = "-";

/// Applies each column's normalization rule to the matching raw cell.
pub fn normalize(raw: &RawRow, spec: &TableSpec) -> Result<NormalizedRow, SkipReason> {
    let mut values = Vec::with_capacity(spec.columns.len());

    for (column, cell) in spec.columns.iter().zip(&raw.cells) {
        let value = normalize_cell(cell.as_deref(), column.normalization).ok_or_else(|| {
            SkipReason::Malformed {
                row: raw.index,
                field: column.field,
                value: cell.clone().unwrap_or_default(),
            }
        })?;
        values.push((column.field, value));
    }

    Ok(NormalizedRow::new(raw.index, values))
}

/// `None` means the cell cannot satisfy the rule and the row must be dropped.
pub fn normalize_cell(cell: Option<&str>, rule: Normalization) -> Option<Value> {
    let value = match (rule, cell) {
        (Normalization::Identity, Some(text)) => Value::Text(text.to_string()),
        (Normalization::Identity, None) => Value::Null,

        (Normalization::DashToZero, None) => Value::Text("0".to_string()),
        (Normalization::DashToZero, Some(text)) if text == PLACEHOLDER => {
            Value::Text("0".to_string())
        }
        (Normalization::DashToZero, Some(text)) => Value::Text(text.to_string()),

        (Normalization::DashToNull, None) => Value::Null,
        (Normalization::DashToNull, Some(text)) if text == PLACEHOLDER => Value::Null,
        (Normalization::DashToNull, Some(text)) => Value::Text(text.to_string()),

        (Normalization::IntOrZero, cell) => Value::Int(int_or_zero(cell.unwrap_or_default())),

        (Normalization::Int, Some(text)) => Value::Int(text.trim().parse().ok()?),
        (Normalization::Int, None) => return None,
    };

    Some(value)
}

/// Parses purely numeric text; anything else, the placeholder included, counts as zero.
pub fn int_or_zero(text: &str) -> i64 {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    text.parse().unwrap_or(0)
}
