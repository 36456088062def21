/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  directory of .csv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read_dir → parse each CSV → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cleaner  │  nulls → column names → dates
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ TableRegistry  │  normalized filename → cleaned Table
///   └───────────────┘
/// ```

pub mod cleaner;
pub mod loader;
pub mod model;
