use super::table::TableSpec;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// One output entity kind, bound to its source page and output file.
pub trait Record: Serialize + Sized {
    const KIND: &'static str;
    const SOURCE_URL: &'static str;
    const OUTPUT_FILE: &'static str;

    fn table_spec() -> Result<TableSpec>;

    fn from_row(row: &NormalizedRow) -> Self;
}

/// Cells of one data row, aligned with the table's `ColumnSpec`s.
/// `None` marks a cell the row does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub index: usize,
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub index: usize,
    values: Vec<(&'static str, Value)>,
}

impl NormalizedRow {
    pub fn new(index: usize, values: Vec<(&'static str, Value)>) -> Self {
        Self { index, values }
    }

    pub fn get(&self, field: &str) -> &Value {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
            .unwrap_or(&Value::Null)
    }

    pub fn opt_text(&self, field: &str) -> Option<String> {
        match self.get(field) {
            Value::Text(text) => Some(text.clone()),
            Value::Int(n) => Some(n.to_string()),
            Value::Null => None,
        }
    }

    pub fn text(&self, field: &str) -> String {
        self.opt_text(field).unwrap_or_default()
    }

    pub fn int(&self, field: &str) -> i64 {
        match self.get(field) {
            Value::Int(n) => *n,
            _ => 0,
        }
    }
}

/// Why a data row produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewCells {
        row: usize,
        found: usize,
        required: usize,
    },
    Malformed {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCells {
                row,
                found,
                required,
            } => write!(f, "row {row}: {found} cells, {required} required"),
            Self::Malformed { row, field, value } => {
                write!(f, "row {row}: field `{field}` has unusable value {value:?}")
            }
        }
    }
}

/// Records in document row order, plus the rows that were left out.
#[derive(Debug)]
pub struct ResultSet<R> {
    records: Vec<R>,
    skipped: Vec<SkipReason>,
}

impl<R> Default for ResultSet<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<R> ResultSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn skip(&mut self, reason: SkipReason) {
        self.skipped.push(reason);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkipReason] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
