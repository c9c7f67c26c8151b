/// Errors raised while reading and normalizing a show dataset.
///
/// Any of these aborts the load; no partially normalized dataset is returned.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("Missing column to drop: '{0}'")]
    MissingColumn(&'static str),

    #[error("Expected {expected} data columns after dropping unused ones, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Row {row}, column '{column}': '{value}' is not a valid {expected}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
