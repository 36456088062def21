//! Read in CSVs, standardize their contents, and expose the report
//! colour palette.
//!
//! The crate is a thin data layer for exploratory analysis: point
//! [`load_dir`] at a folder of CSV files and get back a registry of
//! cleaned [`Table`]s, with null placeholders normalized, column names
//! capitalized, and date-like columns parsed into real timestamps.

pub mod color;
pub mod data;
pub mod error;

pub use color::{report_color, Colormap, COLOR_CYCLE, REPORT_COLORS};
pub use data::cleaner::clean;
pub use data::loader::{load_csv, load_dir, TableRegistry};
pub use data::model::{CellValue, Column, Table};
pub use error::{EdaError, Result};
