//! Error types for folio-tui.
//!
//! Provides domain-specific error handling for the TUI application.

use std::io;

use folio_core::AppError;
use thiserror::Error;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Error raised by the core library (configuration, relay setup).
    #[error(transparent)]
    Core(#[from] AppError),

    /// Logger could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl TuiError {
    /// Message shown after the terminal has been restored.
    pub fn report(&self) -> String {
        match self {
            TuiError::Core(e) => {
                let mut message = e.display_friendly();
                if let Some(hint) = e.troubleshooting_hint() {
                    message.push_str(&format!("\nHint: {}", hint));
                }
                message
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

impl From<folio_core::error::StorageError> for TuiError {
    fn from(e: folio_core::error::StorageError) -> Self {
        TuiError::Core(AppError::Storage(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::StorageError;

    #[test]
    fn test_storage_errors_become_core_errors() {
        let err: TuiError = StorageError::ConfigDirNotFound.into();
        assert!(matches!(err, TuiError::Core(AppError::Storage(_))));
    }

    #[test]
    fn test_terminal_error_report() {
        let err = TuiError::from(io::Error::other("broken pipe"));
        assert!(err.report().contains("broken pipe"));
    }
}
