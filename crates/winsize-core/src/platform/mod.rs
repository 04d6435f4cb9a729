//! Synchronous abstraction over the OS window manager.
//!
//! The resolver and resizer only talk to [`WindowSystem`]. The real backend
//! is Win32; every other target gets a backend that reports the platform as
//! unsupported.

use std::time::Duration;

use crate::window::{WindowError, WindowHandle, WindowRecord, WindowRect};

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use win32::Win32WindowSystem as NativeWindowSystem;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::UnsupportedWindowSystem as NativeWindowSystem;

#[cfg(test)]
pub(crate) mod fake;

/// Window manager primitives used by the resolver and the resizer.
///
/// Every method that takes a handle must tolerate the handle having gone
/// stale; failures are reported through the return value, never a panic.
pub trait WindowSystem {
    /// Exact, case-sensitive title lookup across all top-level windows
    fn find_by_exact_title(&self, title: &str) -> Option<WindowHandle>;

    /// Visible top-level windows with a non-empty title, in OS enumeration
    /// order (top-to-bottom z-order on Win32). The list is built fresh on
    /// every call.
    fn enumerate_windows(&self) -> Result<Vec<WindowRecord>, WindowError>;

    /// The window currently receiving user input, if any
    fn foreground_window(&self) -> Option<WindowHandle>;

    fn is_window(&self, handle: WindowHandle) -> bool;

    fn window_rect(&self, handle: WindowHandle) -> Option<WindowRect>;

    /// `None` when the placement could not be read
    fn is_maximized(&self, handle: WindowHandle) -> Option<bool>;

    /// Restore a maximized or minimized window to its normal placement
    fn restore(&self, handle: WindowHandle);

    /// Move/resize without changing z-order or activating the window.
    /// With `frame_changed`, also force the frame to be recalculated.
    fn set_window_pos(&self, handle: WindowHandle, rect: WindowRect, frame_changed: bool) -> bool;

    /// Generic move/resize primitive (repaints the window)
    fn move_window(&self, handle: WindowHandle, rect: WindowRect) -> bool;

    /// Bring a window back to the foreground
    fn activate(&self, handle: WindowHandle) -> bool;

    /// OS error code of the last failed primitive on this thread
    fn last_error_code(&self) -> u32;

    /// Block while the window manager applies a state change
    fn settle(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// The window system for the current target
pub fn native() -> NativeWindowSystem {
    NativeWindowSystem::new()
}
