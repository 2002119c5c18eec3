//! Error types for billed-core
//!
//! Store failures keep the message the store produced ("Erreur 404",
//! "Erreur 500") because the bills page renders it verbatim.

use thiserror::Error;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Remote store call failed
    StoreFailure,
    /// No user stored in the session
    NoSession,
    /// Form or event data rejected
    ValidationError,
    /// Stored data could not be decoded
    InvalidFormat,
    /// IO error
    IoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::StoreFailure => write!(f, "STORE_FAILURE"),
            ErrorCode::NoSession => write!(f, "NO_SESSION"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for billed-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No user in session")]
    NoSession,

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("IO error occurred")]
    IoError,
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Store(_) => ErrorCode::StoreFailure,
            CoreError::NoSession => ErrorCode::NoSession,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            CoreError::IoError => ErrorCode::IoError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Store(_) => ErrorSeverity::Error,
            CoreError::NoSession => ErrorSeverity::Info,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::InvalidFormat { .. } => ErrorSeverity::Warning,
            CoreError::IoError => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::Store(err) => {
                details = details.with_detail(serde_json::json!({ "status": err.code }));
                details = details.with_suggestion(
                    "Retry the operation; the store may be temporarily unavailable.".to_string()
                );
            }
            CoreError::NoSession => {
                details = details.with_suggestion(
                    "Log in as an employee before opening bill pages.".to_string()
                );
            }
            CoreError::ValidationError { message } => {
                details = details.with_detail(serde_json::json!({ "validation_message": message }));
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<std::io::Error> for CoreError {
    fn from(_error: std::io::Error) -> Self {
        CoreError::IoError
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Session user (if any)
    pub user_email: Option<String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            user_email: None,
        }
    }

    /// Add the session user
    pub fn with_user(mut self, email: &str) -> Self {
        self.user_email = Some(email.to_string());
        self
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
    /// Log a warning
    fn log_warning(&self, message: &str, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Debug, Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        log::error!(
            target: "billed::error",
            "ERROR [{}] {} - Operation: {} - User: {:?}",
            error.code(),
            error,
            context.operation,
            context.user_email
        );
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "billed::error",
            "WARNING: {} - Operation: {} - User: {:?}",
            message,
            context.operation,
            context.user_email
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_message_is_verbatim() {
        let error = CoreError::from(StoreError::not_found());
        assert_eq!(error.to_string(), "Erreur 404");
        assert_eq!(error.code(), ErrorCode::StoreFailure);

        let error = CoreError::from(StoreError::internal());
        assert_eq!(error.to_string(), "Erreur 500");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::StoreFailure.to_string(), "STORE_FAILURE");
        assert_eq!(ErrorCode::NoSession.to_string(), "NO_SESSION");
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::NoSession.severity(), ErrorSeverity::Info);
        assert_eq!(CoreError::IoError.severity(), ErrorSeverity::Error);
        let error = CoreError::ValidationError { message: "bad amount".to_string() };
        assert_eq!(error.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_error_details_store() {
        let details = CoreError::from(StoreError::internal()).to_details();
        assert_eq!(details.code, ErrorCode::StoreFailure);
        assert_eq!(details.details, Some(serde_json::json!({ "status": 500 })));
        assert!(!details.suggestions.is_empty());
        assert!(details.to_string().contains("Erreur 500"));
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("get_bills").with_user("a@a");
        assert_eq!(context.operation, "get_bills");
        assert_eq!(context.user_email.as_deref(), Some("a@a"));
    }
}
