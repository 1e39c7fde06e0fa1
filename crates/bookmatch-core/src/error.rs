//! Error types and exit codes for bookmatch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Data error (bad catalog, degenerate vocabulary, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or degenerate catalog (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading catalogs and building engines
#[derive(Error, Debug)]
pub enum BookmatchError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("record {record} is missing field `{field}`")]
    MissingField { record: String, field: String },

    #[error("catalog {path:?} is missing required columns: {}", .missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },

    #[error("duplicate title {title:?} on row {row} (first seen on row {first_row})")]
    DuplicateTitle {
        title: String,
        first_row: usize,
        row: usize,
    },

    #[error("catalog is empty: at least one record is required")]
    EmptyCatalog,

    #[error("vocabulary is empty: no terms remain after stop-word removal")]
    EmptyVocabulary,

    #[error("catalog not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl BookmatchError {
    /// Create an error for a record missing a required text field
    pub fn missing_field(record: impl std::fmt::Display, field: &str) -> Self {
        BookmatchError::MissingField {
            record: record.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BookmatchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        BookmatchError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        BookmatchError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BookmatchError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BookmatchError::UsageError(_)
            | BookmatchError::InvalidValue { .. }
            | BookmatchError::Unsupported { .. } => ExitCode::Usage,
            BookmatchError::MissingField { .. }
            | BookmatchError::Schema { .. }
            | BookmatchError::DuplicateTitle { .. }
            | BookmatchError::EmptyCatalog
            | BookmatchError::EmptyVocabulary
            | BookmatchError::CatalogNotFound { .. }
            | BookmatchError::NotFound { .. } => ExitCode::Data,
            BookmatchError::Io(_)
            | BookmatchError::Csv(_)
            | BookmatchError::Toml(_)
            | BookmatchError::Json(_)
            | BookmatchError::FailedOperation { .. }
            | BookmatchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BookmatchError::UsageError(_) => "usage_error",
            BookmatchError::InvalidValue { .. } => "invalid_value",
            BookmatchError::Unsupported { .. } => "unsupported",
            BookmatchError::MissingField { .. } => "missing_field",
            BookmatchError::Schema { .. } => "schema_error",
            BookmatchError::DuplicateTitle { .. } => "duplicate_title",
            BookmatchError::EmptyCatalog => "empty_catalog",
            BookmatchError::EmptyVocabulary => "empty_vocabulary",
            BookmatchError::CatalogNotFound { .. } => "catalog_not_found",
            BookmatchError::NotFound { .. } => "not_found",
            BookmatchError::Io(_) => "io_error",
            BookmatchError::Csv(_) => "csv_error",
            BookmatchError::Toml(_) => "toml_error",
            BookmatchError::Json(_) => "json_error",
            BookmatchError::FailedOperation { .. } => "failed_operation",
            BookmatchError::Other(_) => "other",
        }
    }

    /// Render as a structured JSON error envelope
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for bookmatch operations
pub type Result<T> = std::result::Result<T, BookmatchError>;
