use tracing::{debug, warn};

use crate::platform::WindowSystem;
use crate::window::WindowHandle;

/// Remembers the foreground window and hands focus back to it when dropped.
///
/// Dropping happens on every exit path, including early returns and
/// unwinding, so callers never restore focus by hand.
pub(crate) struct FocusGuard<'a> {
    system: &'a dyn WindowSystem,
    previous: Option<WindowHandle>,
}

impl<'a> FocusGuard<'a> {
    pub(crate) fn capture(system: &'a dyn WindowSystem) -> Self {
        let previous = system.foreground_window();
        debug!(event = "core.focus.captured", previous = ?previous);
        Self { system, previous }
    }
}

impl Drop for FocusGuard<'_> {
    fn drop(&mut self) {
        let Some(previous) = self.previous else {
            return;
        };

        if !self.system.is_window(previous) {
            debug!(event = "core.focus.restore_skipped", previous = %previous);
            return;
        }

        if self.system.activate(previous) {
            debug!(event = "core.focus.restore_completed", previous = %previous);
        } else {
            warn!(event = "core.focus.restore_failed", previous = %previous);
        }
    }
}
