//! Error types for expenseweb-core
//!
//! Transport and server failures of the remote expense API, lookups of
//! unknown records and bad form input.

use thiserror::Error;

/// Stable codes written to the error log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Network or connection failure
    TransportError,
    /// Remote API answered with an error status
    RemoteError,
    /// Remote API answered with an undecodable body
    InvalidResponse,
    /// Expense not in the authoritative list
    ExpenseNotFound,
    /// Bad input
    ValidationError,
    /// Configuration error
    ConfigError,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::TransportError => write!(f, "TRANSPORT_ERROR"),
            ErrorCode::RemoteError => write!(f, "REMOTE_ERROR"),
            ErrorCode::InvalidResponse => write!(f, "INVALID_RESPONSE"),
            ErrorCode::ExpenseNotFound => write!(f, "EXPENSE_NOT_FOUND"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Main error type for expenseweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Remote API returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Expense not found: {id}")]
    ExpenseNotFound { id: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Transport { .. } => ErrorCode::TransportError,
            CoreError::Remote { .. } => ErrorCode::RemoteError,
            CoreError::InvalidResponse { .. } => ErrorCode::InvalidResponse,
            CoreError::ExpenseNotFound { .. } => ErrorCode::ExpenseNotFound,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Whether the error came from talking to the remote API
    ///
    /// These all collapse into a single "request failed" outcome for the view.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            CoreError::Transport { .. } | CoreError::Remote { .. } | CoreError::InvalidResponse { .. }
        )
    }

    /// Next step for the user, shown under the error notice
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CoreError::Transport { .. } => {
                Some("Check that the expense API is running and api.base_url is correct.")
            }
            CoreError::Remote { status: 404, .. } | CoreError::ExpenseNotFound { .. } => {
                Some("The record may have been deleted elsewhere; reload the page.")
            }
            CoreError::InvalidResponse { .. } => {
                Some("The API did not answer with expenses shaped as {id, title, amount, category, date}.")
            }
            _ => None,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<reqwest::Error> for CoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            CoreError::InvalidResponse { message: error.to_string() }
        } else {
            CoreError::Transport { message: error.to_string() }
        }
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        log::error!(
            target: "expenseweb::error",
            "ERROR [{}] {} - Operation: {} - Context: {}",
            error.code(),
            error,
            context.operation,
            context.data
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::TransportError.to_string(), "TRANSPORT_ERROR");
        assert_eq!(ErrorCode::ExpenseNotFound.to_string(), "EXPENSE_NOT_FOUND");
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_hints() {
        let error = CoreError::Transport { message: "refused".to_string() };
        assert!(error.hint().unwrap().contains("api.base_url"));

        let error = CoreError::Remote { status: 404, message: String::new() };
        assert!(error.hint().is_some());

        let error = CoreError::Remote { status: 500, message: "boom".to_string() };
        assert_eq!(error.hint(), None);
    }

    #[test]
    fn test_request_failures_collapse() {
        assert!(CoreError::Transport { message: "refused".to_string() }.is_request_failure());
        assert!(CoreError::Remote { status: 502, message: String::new() }.is_request_failure());
        assert!(!CoreError::ExpenseNotFound { id: "1".to_string() }.is_request_failure());
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("submit")
            .with_data("expense_id", serde_json::json!(3));

        assert_eq!(context.operation, "submit");
        assert_eq!(context.data["expense_id"], 3);
    }
}
