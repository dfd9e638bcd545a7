use thiserror::Error;

/// Fatal failures only. Quality findings (unknown columns, type mismatches,
/// missing values, duplicates) never surface here; they fold into the
/// returned [`crate::ValidationResult`].
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The dataset file has no header row, or no columns at all
    #[error("Dataset '{0}' is empty")]
    EmptyDataset(String),

    /// The dataset could not be parsed as CSV
    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] arrow::error::ArrowError),

    /// Dataset or status-file IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The schema file could not be parsed as a JSON object
    #[error("Failed to parse schema file: {0}")]
    SchemaError(#[from] serde_json::Error),
}
