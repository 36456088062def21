use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// CellValue – a single cell in a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
///
/// Columns may hold a mix of variants; the cleaning pipeline narrows
/// date-named columns down to `Date` and `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    /// A parsed timestamp, distinct from whatever text it came from.
    Date(NaiveDateTime),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric summaries.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Serialized with its natural JSON type: `Null` becomes JSON null and
/// `Date` an ISO-8601 string, so a dumped table reads like the source CSV.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Date(d) => {
                serializer.serialize_str(&d.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of a table
// ---------------------------------------------------------------------------

/// A named column; values align positionally with every other column of
/// the owning [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete in-memory table
// ---------------------------------------------------------------------------

/// An in-memory table: an ordered sequence of named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table { columns }
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn display_renders_each_variant() {
        assert_eq!(CellValue::String("abc".into()).to_string(), "abc");
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(
            CellValue::Date(ts(2023, 1, 1)).to_string(),
            "2023-01-01 00:00:00"
        );
        assert_eq!(CellValue::Null.to_string(), "<null>");
    }

    #[test]
    fn serializes_with_natural_json_types() {
        let table = Table::new(vec![Column::new(
            "Mixed",
            vec![
                CellValue::Integer(1),
                CellValue::Null,
                CellValue::Date(ts(2023, 1, 1)),
            ],
        )]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json["columns"][0]["values"],
            serde_json::json!([1, null, "2023-01-01T00:00:00"])
        );
    }

    #[test]
    fn row_count_comes_from_first_column() {
        let table = Table::new(vec![
            Column::new("A", vec![CellValue::Integer(1), CellValue::Integer(2)]),
            Column::new("B", vec![CellValue::Null, CellValue::Null]),
        ]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.column_names(), vec!["A", "B"]);
        assert!(table.column("A").is_some());
        assert!(table.column("a").is_none());
        assert!(Table::default().is_empty());
    }
}
