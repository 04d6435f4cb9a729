use std::time::Duration;

use tracing::{info, warn};

use super::focus::FocusGuard;
use super::strategy::{RESIZE_STRATEGIES, ResizeStrategy};
use super::types::{ResizeOutcome, ResizeRequest};
use crate::platform::WindowSystem;
use crate::window::{Size, WindowError, WindowHandle, WindowRect, resolve};

/// Pause after restoring a maximized window, before resizing it
pub const RESTORE_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Resolve `request.name` to a window and resize it.
///
/// Not reentrant: focus and geometry are global window-manager state, so
/// the caller must not run overlapping calls.
pub fn resize_by_name(system: &dyn WindowSystem, request: &ResizeRequest) -> ResizeOutcome {
    info!(
        event = "core.resize.request_started",
        name = request.name,
        width = request.size.width,
        height = request.size.height
    );

    let outcome = match resolve(system, &request.name) {
        Ok(handle) => resize(system, &request.name, handle, request.size),
        Err(WindowError::WindowNotFound { .. }) => ResizeOutcome::NotFound {
            name: request.name.clone(),
        },
        Err(e) => ResizeOutcome::InternalError {
            name: request.name.clone(),
            message: e.to_string(),
        },
    };

    info!(
        event = "core.resize.request_completed",
        name = request.name,
        category = outcome.category()
    );
    outcome
}

/// Resize a window in place without taking focus from the current
/// foreground window.
///
/// The top-left corner stays put; only the extent changes. `name` is used
/// for diagnostics only. Focus goes back to the previously focused window
/// (if it still exists) whatever the outcome.
pub fn resize(
    system: &dyn WindowSystem,
    name: &str,
    handle: WindowHandle,
    size: Size,
) -> ResizeOutcome {
    let focus = FocusGuard::capture(system);

    if !system.is_window(handle) {
        warn!(event = "core.resize.handle_stale", name = name, handle = %handle);
        return ResizeOutcome::InvalidHandle {
            name: name.to_string(),
            requested: size,
        };
    }

    let Some(current) = system.window_rect(handle) else {
        warn!(event = "core.resize.geometry_unavailable", name = name, handle = %handle);
        return ResizeOutcome::GeometryUnavailable {
            name: name.to_string(),
            requested: size,
        };
    };

    info!(
        event = "core.resize.started",
        name = name,
        handle = %handle,
        current = %current.size(),
        target = %size
    );

    if system.is_maximized(handle) == Some(true) {
        info!(event = "core.resize.restore_maximized", name = name, handle = %handle);
        system.restore(handle);
        system.settle(RESTORE_SETTLE_DELAY);
    }

    let target = current.with_size(size);
    let applied = apply_strategies(system, handle, target);
    // Read before focus restoration can overwrite it.
    let error_code = if applied.is_none() {
        system.last_error_code()
    } else {
        0
    };

    drop(focus);

    match applied {
        Some(strategy) => verify(system, name, handle, size, strategy),
        None => {
            warn!(
                event = "core.resize.failed",
                name = name,
                target = %size,
                error_code = error_code
            );
            ResizeOutcome::ResizeFailed {
                name: name.to_string(),
                requested: size,
                error_code,
            }
        }
    }
}

fn apply_strategies(
    system: &dyn WindowSystem,
    handle: WindowHandle,
    target: WindowRect,
) -> Option<ResizeStrategy> {
    RESIZE_STRATEGIES.into_iter().find(|strategy| {
        let applied = (strategy.apply)(system, handle, target);
        if !applied {
            warn!(
                event = "core.resize.strategy_failed",
                handle = %handle,
                strategy = strategy.name
            );
        }
        applied
    })
}

fn verify(
    system: &dyn WindowSystem,
    name: &str,
    handle: WindowHandle,
    requested: Size,
    strategy: ResizeStrategy,
) -> ResizeOutcome {
    let Some(after) = system.window_rect(handle) else {
        warn!(
            event = "core.resize.verify_unavailable",
            name = name,
            strategy = strategy.name
        );
        return ResizeOutcome::SuccessUnverified {
            name: name.to_string(),
            size: requested,
        };
    };

    let actual = after.size();
    if actual == requested {
        info!(
            event = "core.resize.completed",
            name = name,
            size = %actual,
            strategy = strategy.name
        );
        ResizeOutcome::Success {
            name: name.to_string(),
            size: actual,
        }
    } else {
        warn!(
            event = "core.resize.size_mismatch",
            name = name,
            requested = %requested,
            actual = %actual,
            strategy = strategy.name
        );
        ResizeOutcome::PartialSuccess {
            name: name.to_string(),
            requested,
            actual,
        }
    }
}
