/// Error types for the save-and-auth flow
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Everything that can end (or divert) a popup invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// A browser API (tabs, cookies, runtime) call failed.
    #[error("Browser API error: {0}")]
    Platform(String),

    /// The fetch itself failed before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The auth probe could not be run during login polling.
    #[error("Auth check failed: {0}")]
    Auth(String),

    /// The save endpoint answered 401.
    #[error("Session expired")]
    Unauthorized,

    /// The save response was well-formed but reported failure, or did not
    /// match the `{ success, error? }` schema.
    #[error("Invalid save response: {message}")]
    Validation {
        message: String,
        /// Error text supplied by the backend, shown to the user verbatim.
        backend_message: Option<String>,
    },

    /// The login wait ran out of attempts.
    #[error("Login timed out after {attempts} checks")]
    Timeout { attempts: u32 },
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        FlowError::Validation {
            message: message.into(),
            backend_message: None,
        }
    }

    /// Text rendered in the status region when this error ends a save.
    pub fn save_failure_message(&self) -> String {
        match self {
            FlowError::Validation {
                backend_message: Some(msg),
                ..
            } if !msg.is_empty() => msg.clone(),
            _ => "Failed to save".to_string(),
        }
    }
}
