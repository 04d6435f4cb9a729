use crate::errors::WinsizeError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Window not found: '{title}'")]
    WindowNotFound { title: String },

    #[error("Window management is not supported on {os}")]
    UnsupportedPlatform { os: &'static str },
}

impl WinsizeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::UnsupportedPlatform { .. } => "UNSUPPORTED_PLATFORM",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::WindowNotFound { .. })
    }
}
