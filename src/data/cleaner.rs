use chrono::{NaiveDate, NaiveDateTime};

use super::model::{CellValue, Table};
use crate::error::{EdaError, Result};

// ---------------------------------------------------------------------------
// Cleaning pipeline
// ---------------------------------------------------------------------------

/// Literal cell values treated as missing data. Matching is exact and
/// case-sensitive: `"NA"` and `"N/A"` are ordinary strings.
const NULL_MARKERS: [&str; 2] = ["na", "0000-00-00 00:00:00"];

/// Run the full cleaning pipeline on a freshly parsed table.
///
/// Steps, in order: null normalization, column-name capitalization, date
/// coercion. Null normalization must run before date coercion so the
/// placeholder timestamp becomes a null instead of parsing as a date.
pub fn clean(table: Table) -> Result<Table> {
    let table = normalize_nulls(table);
    let table = capitalize_columns(table)?;
    coerce_dates(table)
}

/// Replace every placeholder cell with [`CellValue::Null`].
pub fn normalize_nulls(mut table: Table) -> Table {
    for col in &mut table.columns {
        for cell in &mut col.values {
            if let CellValue::String(s) = cell {
                if NULL_MARKERS.contains(&s.as_str()) {
                    *cell = CellValue::Null;
                }
            }
        }
    }
    table
}

/// Uppercase the first character of every column name, leaving the rest
/// unchanged (`"orderDate"` → `"OrderDate"`).
pub fn capitalize_columns(mut table: Table) -> Result<Table> {
    for (index, col) in table.columns.iter_mut().enumerate() {
        let mut chars = col.name.chars();
        match chars.next() {
            None => return Err(EdaError::EmptyColumnName { index }),
            Some(first) => col.name = first.to_uppercase().chain(chars).collect(),
        }
    }
    Ok(table)
}

/// Parse every cell of the date-named columns into a temporal value.
///
/// A column is date-named when its name, lowercased and trimmed, contains
/// the substring `"date"`. Null cells are skipped and already-parsed
/// `Date` cells pass through, so cleaning a table twice is a no-op. The
/// first unparseable cell aborts the whole clean.
pub fn coerce_dates(mut table: Table) -> Result<Table> {
    for col in &mut table.columns {
        if !col.name.to_lowercase().trim().contains("date") {
            continue;
        }
        for cell in &mut col.values {
            let text = match cell {
                CellValue::Null | CellValue::Date(_) => continue,
                ref other => other.to_string(),
            };
            match parse_datetime(&text) {
                Some(dt) => *cell = CellValue::Date(dt),
                None => {
                    return Err(EdaError::DateParse {
                        column: col.name.clone(),
                        value: text,
                    })
                }
            }
        }
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Best-effort date parsing
// ---------------------------------------------------------------------------

/// Formats tried for cells carrying both a date and a time of day.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats, extended to midnight. Ambiguous numeric forms are
/// read month-first.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%Y%m%d",
];

/// Best-effort parse of a date string. Returns `None` when no known
/// format matches.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn strings(values: &[&str]) -> Vec<CellValue> {
        values
            .iter()
            .map(|s| CellValue::String((*s).to_string()))
            .collect()
    }

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn placeholders_become_null_exact_match_only() {
        let table = Table::new(vec![Column::new(
            "notes",
            strings(&["na", "NA", "0000-00-00 00:00:00", "n/a", "fine"]),
        )]);
        let cleaned = normalize_nulls(table);
        assert_eq!(
            cleaned.columns[0].values,
            vec![
                CellValue::Null,
                CellValue::String("NA".into()),
                CellValue::Null,
                CellValue::String("n/a".into()),
                CellValue::String("fine".into()),
            ]
        );
    }

    #[test]
    fn capitalizes_only_the_first_character() {
        let table = Table::new(vec![
            Column::new("orderDate", vec![]),
            Column::new("amount", vec![]),
            Column::new("ID", vec![]),
            Column::new("signup date", vec![]),
        ]);
        let cleaned = capitalize_columns(table).unwrap();
        assert_eq!(
            cleaned.column_names(),
            vec!["OrderDate", "Amount", "ID", "Signup date"]
        );
    }

    #[test]
    fn empty_column_name_is_an_error() {
        let table = Table::new(vec![Column::new("id", vec![]), Column::new("", vec![])]);
        match capitalize_columns(table) {
            Err(EdaError::EmptyColumnName { index }) => assert_eq!(index, 1),
            other => panic!("expected EmptyColumnName, got {other:?}"),
        }
    }

    #[test]
    fn date_columns_are_coerced() {
        let table = Table::new(vec![
            Column::new("OrderDate", strings(&["2023-01-01", "06/15/2023"])),
            Column::new("Amount", strings(&["2023-01-01"])),
        ]);
        let cleaned = coerce_dates(table).unwrap();
        assert_eq!(
            cleaned.columns[0].values,
            vec![
                CellValue::Date(ts(2023, 1, 1)),
                CellValue::Date(ts(2023, 6, 15)),
            ]
        );
        // non-date column untouched
        assert_eq!(
            cleaned.columns[1].values,
            vec![CellValue::String("2023-01-01".into())]
        );
    }

    #[test]
    fn date_match_is_case_insensitive_on_the_column_name() {
        let table = Table::new(vec![Column::new(
            "DATE_OF_BIRTH",
            strings(&["1990-05-20"]),
        )]);
        let cleaned = coerce_dates(table).unwrap();
        assert_eq!(cleaned.columns[0].values, vec![CellValue::Date(ts(1990, 5, 20))]);
    }

    #[test]
    fn null_in_date_column_is_skipped_not_parsed() {
        let table = Table::new(vec![Column::new(
            "date_of_birth",
            strings(&["na", "1990-05-20"]),
        )]);
        let cleaned = clean(table).unwrap();
        assert_eq!(
            cleaned.columns[0].values,
            vec![CellValue::Null, CellValue::Date(ts(1990, 5, 20))]
        );
    }

    #[test]
    fn placeholder_timestamp_in_date_column_becomes_null() {
        // Ordering matters: without null normalization first, the
        // placeholder would hit the date parser and fail.
        let table = Table::new(vec![Column::new(
            "updateDate",
            strings(&["0000-00-00 00:00:00", "2022-12-31"]),
        )]);
        let cleaned = clean(table).unwrap();
        assert_eq!(
            cleaned.columns[0].values,
            vec![CellValue::Null, CellValue::Date(ts(2022, 12, 31))]
        );
    }

    #[test]
    fn unparseable_date_aborts_the_clean() {
        let table = Table::new(vec![Column::new("OrderDate", strings(&["tomorrow"]))]);
        match coerce_dates(table) {
            Err(EdaError::DateParse { column, value }) => {
                assert_eq!(column, "OrderDate");
                assert_eq!(value, "tomorrow");
            }
            other => panic!("expected DateParse, got {other:?}"),
        }
    }

    #[test]
    fn cleaning_twice_is_a_noop() {
        let table = Table::new(vec![
            Column::new("orderDate", strings(&["2023-01-01", "na"])),
            Column::new("amount", vec![CellValue::Integer(50), CellValue::Null]),
        ]);
        let once = clean(table).unwrap();
        let twice = clean(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn parses_common_formats() {
        let expected = ts(2023, 1, 2);
        for input in [
            "2023-01-02",
            "2023/01/02",
            "01/02/2023",
            "2 Jan 2023",
            "Jan 2, 2023",
            "20230102",
            "  2023-01-02  ",
        ] {
            assert_eq!(parse_datetime(input), Some(expected), "input {input:?}");
        }
        assert_eq!(
            parse_datetime("2023-01-02 13:45:10"),
            NaiveDate::from_ymd_opt(2023, 1, 2)
                .unwrap()
                .and_hms_opt(13, 45, 10)
        );
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime(""), None);
    }
}
