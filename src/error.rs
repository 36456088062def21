use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors raised while loading and cleaning tables.
///
/// Every variant is fatal to the enclosing operation: the loader hands back
/// either a complete registry or the first error it hit, never a partial
/// result.
#[derive(Debug, Error)]
pub enum EdaError {
    /// A directory entry whose name lacks the `.csv` suffix (case-sensitive).
    #[error("File {0} is not a csv.")]
    NotACsv(String),

    /// A column with an empty header name, found during renaming.
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// A cell in a date-named column that no known date format matches.
    #[error("column '{column}': cannot parse '{value}' as a date")]
    DateParse { column: String, value: String },

    /// A malformed hex code handed to `Colormap::from_hex`.
    #[error("invalid hex colour '{0}'")]
    Color(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EdaError>;
