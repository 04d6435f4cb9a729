use tracing::{debug, info};

use super::errors::WindowError;
use super::types::{WindowHandle, WindowInfo, WindowRecord};
use crate::platform::WindowSystem;

/// Symmetric case-insensitive containment: either string contains the other.
///
/// An empty title never matches. An empty query is rejected too, since it
/// would otherwise be contained in every title.
pub fn title_matches(query: &str, title: &str) -> bool {
    if query.is_empty() || title.is_empty() {
        return false;
    }

    let query_lower = query.to_lowercase();
    let title_lower = title.to_lowercase();
    title_lower.contains(&query_lower) || query_lower.contains(&title_lower)
}

/// Resolve a human-supplied name to a single window.
///
/// An exact title match wins outright and skips enumeration. Otherwise the
/// first window in OS enumeration order whose title partially matches (see
/// [`title_matches`]) is returned. There is no ranking among several partial
/// matches: this is "first match in enumeration order", not "best match".
///
/// An empty name resolves to nothing without touching the window system:
/// an exact lookup for `""` would return an untitled window.
pub fn resolve(system: &dyn WindowSystem, name: &str) -> Result<WindowHandle, WindowError> {
    info!(event = "core.window.resolve_started", name = name);

    if name.is_empty() {
        return Err(WindowError::WindowNotFound {
            title: String::new(),
        });
    }

    if let Some(handle) = system.find_by_exact_title(name) {
        info!(
            event = "core.window.resolve_completed",
            name = name,
            handle = %handle,
            match_kind = "exact"
        );
        return Ok(handle);
    }

    let candidates = system.enumerate_windows()?;
    debug!(
        event = "core.window.candidates_enumerated",
        name = name,
        count = candidates.len()
    );

    let found = candidates
        .into_iter()
        .find(|record| title_matches(name, &record.title));

    match found {
        Some(WindowRecord { handle, title }) => {
            info!(
                event = "core.window.resolve_completed",
                name = name,
                handle = %handle,
                title = title,
                match_kind = "partial"
            );
            Ok(handle)
        }
        None => Err(WindowError::WindowNotFound {
            title: name.to_string(),
        }),
    }
}

/// List visible titled windows with their current geometry
pub fn list_windows(system: &dyn WindowSystem) -> Result<Vec<WindowInfo>, WindowError> {
    info!(event = "core.window.list_started");

    let result: Vec<WindowInfo> = system
        .enumerate_windows()?
        .into_iter()
        .filter(|record| !record.title.is_empty())
        .map(|record| WindowInfo {
            rect: system.window_rect(record.handle),
            handle: record.handle,
            title: record.title,
        })
        .collect();

    info!(event = "core.window.list_completed", count = result.len());
    Ok(result)
}
