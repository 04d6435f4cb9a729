use std::fmt;

use serde::{Deserialize, Serialize};

use crate::window::Size;

/// A request to resize the window matching `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRequest {
    /// Human-supplied window name, exact or partial title
    pub name: String,
    /// Target size in pixels; the OS may clamp it
    pub size: Size,
}

impl ResizeRequest {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            size: Size::new(width, height),
        }
    }
}

/// Terminal state of one resize call.
///
/// Rendered as a single line of text with a leading marker glyph, which is
/// the only value handed back across the host boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ResizeOutcome {
    /// Resize succeeded and the verified size matches exactly
    Success { name: String, size: Size },
    /// The resize call succeeded but the window ended up a different size
    PartialSuccess {
        name: String,
        requested: Size,
        actual: Size,
    },
    /// The resize call succeeded but the new geometry could not be read back
    SuccessUnverified { name: String, size: Size },
    NotFound { name: String },
    /// The resolved handle went stale before it could be used
    InvalidHandle { name: String, requested: Size },
    /// The current window rectangle could not be read
    GeometryUnavailable { name: String, requested: Size },
    /// Every resize strategy failed
    ResizeFailed {
        name: String,
        requested: Size,
        error_code: u32,
    },
    InternalError { name: String, message: String },
}

impl ResizeOutcome {
    /// Stable identifier of the outcome category
    pub fn category(&self) -> &'static str {
        match self {
            ResizeOutcome::Success { .. } => "success",
            ResizeOutcome::PartialSuccess { .. } => "partial_success",
            ResizeOutcome::SuccessUnverified { .. } => "success_unverified",
            ResizeOutcome::NotFound { .. } => "not_found",
            ResizeOutcome::InvalidHandle { .. } => "invalid_handle",
            ResizeOutcome::GeometryUnavailable { .. } => "geometry_unavailable",
            ResizeOutcome::ResizeFailed { .. } => "resize_failed",
            ResizeOutcome::InternalError { .. } => "internal_error",
        }
    }

    /// The window name the request was made with
    pub fn name(&self) -> &str {
        match self {
            ResizeOutcome::Success { name, .. }
            | ResizeOutcome::PartialSuccess { name, .. }
            | ResizeOutcome::SuccessUnverified { name, .. }
            | ResizeOutcome::NotFound { name }
            | ResizeOutcome::InvalidHandle { name, .. }
            | ResizeOutcome::GeometryUnavailable { name, .. }
            | ResizeOutcome::ResizeFailed { name, .. }
            | ResizeOutcome::InternalError { name, .. } => name,
        }
    }

    /// Leading glyph of the rendered message, one per category
    pub fn marker(&self) -> &'static str {
        match self {
            ResizeOutcome::Success { .. } => "✅",
            ResizeOutcome::PartialSuccess { .. } => "⚠️",
            ResizeOutcome::SuccessUnverified { .. } => "☑️",
            ResizeOutcome::NotFound { .. } => "🔍",
            ResizeOutcome::InvalidHandle { .. } => "❌",
            ResizeOutcome::GeometryUnavailable { .. } => "📐",
            ResizeOutcome::ResizeFailed { .. } => "🚫",
            ResizeOutcome::InternalError { .. } => "💥",
        }
    }

    /// Whether the underlying resize call went through
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ResizeOutcome::Success { .. }
                | ResizeOutcome::PartialSuccess { .. }
                | ResizeOutcome::SuccessUnverified { .. }
        )
    }
}

impl fmt::Display for ResizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = self.marker();
        match self {
            ResizeOutcome::Success { name, size } => write!(
                f,
                "{marker} Successfully resized '{name}' to {size} pixels (focus preserved)."
            ),
            ResizeOutcome::PartialSuccess {
                name,
                requested,
                actual,
            } => write!(
                f,
                "{marker} Resize of '{name}' reported success but the window size differs. \
                 Current: {actual}, Expected: {requested} (focus preserved)"
            ),
            ResizeOutcome::SuccessUnverified { name, size } => write!(
                f,
                "{marker} Resized '{name}' to {size} pixels, but the new size could not be \
                 verified (focus preserved)."
            ),
            ResizeOutcome::NotFound { name } => write!(
                f,
                "{marker} Window '{name}' not found. Make sure the application is running \
                 and the window title is correct."
            ),
            ResizeOutcome::InvalidHandle { name, requested } => write!(
                f,
                "{marker} Invalid window handle for '{name}'; the window closed before it \
                 could be resized to {requested}."
            ),
            ResizeOutcome::GeometryUnavailable { name, requested } => write!(
                f,
                "{marker} Failed to get current window position for '{name}' \
                 (requested {requested})."
            ),
            ResizeOutcome::ResizeFailed {
                name,
                requested,
                error_code,
            } => write!(
                f,
                "{marker} Failed to resize '{name}' to {requested}. Error code: {error_code}"
            ),
            ResizeOutcome::InternalError { name, message } => write!(
                f,
                "{marker} Native API error while resizing '{name}': {message}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_outcomes() -> Vec<ResizeOutcome> {
        let name = "Notepad".to_string();
        let size = Size::new(800, 600);
        vec![
            ResizeOutcome::Success {
                name: name.clone(),
                size,
            },
            ResizeOutcome::PartialSuccess {
                name: name.clone(),
                requested: size,
                actual: Size::new(816, 639),
            },
            ResizeOutcome::SuccessUnverified {
                name: name.clone(),
                size,
            },
            ResizeOutcome::NotFound { name: name.clone() },
            ResizeOutcome::InvalidHandle {
                name: name.clone(),
                requested: size,
            },
            ResizeOutcome::GeometryUnavailable {
                name: name.clone(),
                requested: size,
            },
            ResizeOutcome::ResizeFailed {
                name: name.clone(),
                requested: size,
                error_code: 5,
            },
            ResizeOutcome::InternalError {
                name,
                message: "boom".to_string(),
            },
        ]
    }

    #[test]
    fn test_every_category_has_a_distinct_marker() {
        let outcomes = all_outcomes();
        let markers: HashSet<_> = outcomes.iter().map(|o| o.marker()).collect();
        let categories: HashSet<_> = outcomes.iter().map(|o| o.category()).collect();
        assert_eq!(markers.len(), outcomes.len());
        assert_eq!(categories.len(), outcomes.len());
    }

    #[test]
    fn test_every_message_starts_with_marker_and_names_window() {
        for outcome in all_outcomes() {
            let text = outcome.to_string();
            assert!(text.starts_with(outcome.marker()), "{text}");
            assert!(text.contains("'Notepad'"), "{text}");
            assert_eq!(outcome.name(), "Notepad");
        }
    }

    #[test]
    fn test_success_message() {
        let outcome = ResizeOutcome::Success {
            name: "Calculator".to_string(),
            size: Size::new(1024, 768),
        };
        assert_eq!(
            outcome.to_string(),
            "✅ Successfully resized 'Calculator' to 1024x768 pixels (focus preserved)."
        );
        assert!(outcome.is_success());
    }

    #[test]
    fn test_partial_success_reports_both_sizes() {
        let outcome = ResizeOutcome::PartialSuccess {
            name: "Calculator".to_string(),
            requested: Size::new(100, 100),
            actual: Size::new(320, 480),
        };
        let text = outcome.to_string();
        assert!(text.contains("Current: 320x480"));
        assert!(text.contains("Expected: 100x100"));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_resize_failed_includes_error_code() {
        let outcome = ResizeOutcome::ResizeFailed {
            name: "Calculator".to_string(),
            requested: Size::new(800, 600),
            error_code: 1400,
        };
        assert_eq!(
            outcome.to_string(),
            "🚫 Failed to resize 'Calculator' to 800x600. Error code: 1400"
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_outcome_serializes_with_category_tag() {
        let outcome = ResizeOutcome::NotFound {
            name: "Calculator".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["category"], outcome.category());
        assert_eq!(json["name"], "Calculator");
    }
}
