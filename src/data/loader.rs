use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::cleaner::clean;
use super::model::{CellValue, Column, Table};
use crate::error::{EdaError, Result};

// ---------------------------------------------------------------------------
// Table registry
// ---------------------------------------------------------------------------

/// Cleaned tables keyed by normalized filename: the part before the first
/// `.`, lowercased, spaces replaced with underscores.
pub type TableRegistry = BTreeMap<String, Table>;

// ---------------------------------------------------------------------------
// Single-file CSV loader
// ---------------------------------------------------------------------------

/// Parse one CSV file into a raw (uncleaned) table.
///
/// A header row is required. Cell types are guessed per cell: empty →
/// null, then integer, then float, then string.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        for (idx, col) in columns.iter_mut().enumerate() {
            col.values.push(guess_cell_type(record.get(idx).unwrap_or("")));
        }
    }

    Ok(Table::new(columns))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Directory ingestion
// ---------------------------------------------------------------------------

/// Append a trailing separator if missing and anchor the path under the
/// parent directory (`"data"` → `"../data/"`).
///
/// The parent-relative prefix is a working-directory convention inherited
/// from the notebook layout this tool grew up in: data folders sit next
/// to, not inside, the directory the analysis runs from. Callers outside
/// that layout pass a path that already starts with `../`.
pub fn normalize_dir_path(dir_path: &str) -> String {
    let mut path = dir_path.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    if !path.starts_with("../") {
        path = format!("../{path}");
    }
    path
}

/// Read every CSV in a directory into a cleaned [`TableRegistry`].
///
/// The listing is non-recursive and comes back in filesystem order. Any
/// entry whose name does not end in `.csv` — case-sensitive, and
/// subdirectories are not exempt — aborts the whole load; there is no
/// partial registry. Files whose names normalize to the same key
/// overwrite each other, last write wins.
///
/// When `verbose` is set, a progress line is printed to stdout for each
/// entry before it is checked.
pub fn load_dir(dir_path: &str, verbose: bool) -> Result<TableRegistry> {
    let dir_path = normalize_dir_path(dir_path);
    let mut registry = TableRegistry::new();

    for entry in fs::read_dir(&dir_path)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if verbose {
            println!("[*] Reading in {file_name}...");
        }
        if !file_name.ends_with(".csv") {
            return Err(EdaError::NotACsv(file_name));
        }

        let table = clean(load_csv(&entry.path())?)?;
        let key = registry_key(&file_name);
        debug!("loaded '{file_name}' as '{key}' ({} rows)", table.num_rows());
        registry.insert(key, table);
    }

    Ok(registry)
}

/// Derive the registry key from a filename.
fn registry_key(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or("");
    stem.to_lowercase().replace(' ', "_")
}
