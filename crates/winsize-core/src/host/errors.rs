use crate::errors::WinsizeError;

/// Malformed call from the host. Raised before any window lookup.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("Expected 3 arguments: appName, width, height")]
    MissingArguments { received: usize },

    #[error("Invalid argument types")]
    InvalidTypes,
}

impl WinsizeError for ArgumentError {
    fn error_code(&self) -> &'static str {
        match self {
            ArgumentError::MissingArguments { .. } => "MISSING_ARGUMENTS",
            ArgumentError::InvalidTypes => "INVALID_ARGUMENT_TYPES",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
