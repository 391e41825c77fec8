//! Error types for the rating pipeline
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific pipeline scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Dataset format error in {path}: {message}")]
    DatasetFormat { path: String, message: String },

    #[error("No usable bout rows in {path}")]
    EmptyDataset { path: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Export failed: {message}")]
    ExportFailed { message: String },
}
