use crate::window::{WindowError, WindowHandle, WindowRecord, WindowRect};

use super::WindowSystem;

/// Backend for targets without a window manager integration.
///
/// Lookups find nothing and enumeration fails, so every operation ends in a
/// diagnostic instead of silently doing nothing.
#[derive(Debug, Default)]
pub struct UnsupportedWindowSystem;

impl UnsupportedWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl WindowSystem for UnsupportedWindowSystem {
    fn find_by_exact_title(&self, _title: &str) -> Option<WindowHandle> {
        None
    }

    fn enumerate_windows(&self) -> Result<Vec<WindowRecord>, WindowError> {
        Err(WindowError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        None
    }

    fn is_window(&self, _handle: WindowHandle) -> bool {
        false
    }

    fn window_rect(&self, _handle: WindowHandle) -> Option<WindowRect> {
        None
    }

    fn is_maximized(&self, _handle: WindowHandle) -> Option<bool> {
        None
    }

    fn restore(&self, _handle: WindowHandle) {}

    fn set_window_pos(&self, _handle: WindowHandle, _rect: WindowRect, _frame_changed: bool) -> bool {
        false
    }

    fn move_window(&self, _handle: WindowHandle, _rect: WindowRect) -> bool {
        false
    }

    fn activate(&self, _handle: WindowHandle) -> bool {
        false
    }

    fn last_error_code(&self) -> u32 {
        0
    }
}
