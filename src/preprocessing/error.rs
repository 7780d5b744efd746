//! Error types for preprocessing operations.

use crate::frame::DataType;
use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// Invalid hyperparameter value, rejected at construction.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// A fitted-state operation was called before `fit`.
    #[error("This {0} instance is not fitted yet. Call 'fit' with appropriate data before using this transformer.")]
    NotFitted(&'static str),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// A column has no usable values.
    #[error("Missing values: {0}")]
    MissingValues(String),
    /// Numerical computation produced a non-finite value.
    #[error("Numerical error: {0}")]
    NumericalError(String),
    /// Requested column does not exist.
    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),
    /// A column used as numeric has another type.
    #[error("Column '{column}' is {dtype}, expected numeric")]
    NonNumericColumn { column: String, dtype: DataType },
    /// Auto-detection found nothing to work on.
    #[error("No numeric columns found in the dataset")]
    NoNumericColumns,
    /// Column count differs from the one seen during fit.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Column length differs from the frame's row count.
    #[error("Dimension mismatch: expected {expected} rows, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl PreprocessingError {
    /// `true` for errors raised while validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, PreprocessingError::InvalidParameter(_))
    }

    /// `true` if the transformer was used before fitting.
    pub fn is_not_fitted(&self) -> bool {
        matches!(self, PreprocessingError::NotFitted(_))
    }
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for PreprocessingError {
    fn from(err: serde_json::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for PreprocessingError {
    fn from(err: csv::Error) -> Self {
        PreprocessingError::Csv(err.to_string())
    }
}
