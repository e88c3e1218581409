//! Error types for the wizard library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Draft store connection or query errors
    #[error("Draft store error: {message}")]
    DraftStore {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The external plan-creation call failed; the wizard state is preserved
    /// and the user decides whether to retry.
    #[error("Plan creation failed: {message}")]
    PlanCreation { message: String },
    /// Handing the allocated calendar to the calendar collaborator failed.
    #[error("Calendar hand-off failed: {message}")]
    CalendarHandoff { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating draft store errors with optional context.
pub struct DraftStoreErrorBuilder {
    message: String,
}

impl DraftStoreErrorBuilder {
    /// Create a new draft store error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WizardError {
        WizardError::DraftStore {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for draft store errors.
    pub fn draft_store(message: impl Into<String>) -> DraftStoreErrorBuilder {
        DraftStoreErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for draft-store-related Results.
pub trait DraftResultExt<T> {
    /// Map rusqlite errors with a message.
    fn draft_context(self, message: &str) -> Result<T>;
}

impl<T> DraftResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn draft_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::draft_store(message).with_source(e))
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
