use std::cell::Cell;
use std::ffi::c_void;

use tracing::debug;
use windows::Win32::Foundation::{GetLastError, HWND, LPARAM, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, FindWindowW, GetForegroundWindow, GetWindowPlacement, GetWindowRect,
    GetWindowTextLengthW, GetWindowTextW, IsWindow, IsWindowVisible, MoveWindow, SW_RESTORE,
    SW_SHOWMAXIMIZED, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SetForegroundWindow,
    SetWindowPos, ShowWindow, WINDOWPLACEMENT,
};
use windows::core::{BOOL, HRESULT, PCWSTR};

use crate::window::{WindowError, WindowHandle, WindowRecord, WindowRect};

use super::WindowSystem;

/// Win32 window manager backend
#[derive(Debug, Default)]
pub struct Win32WindowSystem {
    /// Error code of the most recent failed move/resize primitive, taken
    /// from the call's own error rather than a later `GetLastError`.
    last_resize_error: Cell<Option<u32>>,
}

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn track(&self, result: windows::core::Result<()>) -> bool {
        match result {
            Ok(()) => {
                self.last_resize_error.set(None);
                true
            }
            Err(e) => {
                self.last_resize_error.set(Some(win32_code(e.code())));
                false
            }
        }
    }
}

/// Unwrap a `HRESULT_FROM_WIN32` value back to the plain Win32 error code.
/// Other HRESULTs are returned as their raw bit pattern.
fn win32_code(hr: HRESULT) -> u32 {
    let bits = hr.0 as u32;
    if bits & 0xFFFF_0000 == 0x8007_0000 {
        bits & 0xFFFF
    } else {
        bits
    }
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

fn from_hwnd(hwnd: HWND) -> Option<WindowHandle> {
    if hwnd.0.is_null() {
        None
    } else {
        Some(WindowHandle::from_raw(hwnd.0 as isize))
    }
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn window_title(hwnd: HWND) -> Option<String> {
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return None;
    }

    let mut buf = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
    if copied <= 0 {
        return None;
    }

    Some(String::from_utf16_lossy(&buf[..copied as usize]))
}

/// `EnumWindows` callback. `lparam` carries the caller's record list.
unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: enumerate_windows passes a live &mut Vec<WindowRecord> that
    // outlives the synchronous EnumWindows call.
    let records = unsafe { &mut *(lparam.0 as *mut Vec<WindowRecord>) };

    let live = unsafe { IsWindow(Some(hwnd)) }.as_bool();
    let visible = unsafe { IsWindowVisible(hwnd) }.as_bool();
    if live && visible {
        if let (Some(handle), Some(title)) = (from_hwnd(hwnd), window_title(hwnd)) {
            records.push(WindowRecord::new(handle, title));
        }
    }

    BOOL::from(true)
}

impl WindowSystem for Win32WindowSystem {
    fn find_by_exact_title(&self, title: &str) -> Option<WindowHandle> {
        let wide = to_wide(title);
        let hwnd = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(wide.as_ptr())) }.ok()?;
        from_hwnd(hwnd)
    }

    fn enumerate_windows(&self) -> Result<Vec<WindowRecord>, WindowError> {
        let mut records: Vec<WindowRecord> = Vec::new();
        let context = LPARAM(&mut records as *mut Vec<WindowRecord> as isize);

        unsafe { EnumWindows(Some(collect_window), context) }.map_err(|e| {
            WindowError::EnumerationFailed {
                message: e.to_string(),
            }
        })?;

        debug!(event = "core.platform.enumerate_completed", count = records.len());
        Ok(records)
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        from_hwnd(unsafe { GetForegroundWindow() })
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindow(Some(to_hwnd(handle))) }.as_bool()
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<WindowRect> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(to_hwnd(handle), &mut rect) }.ok()?;
        Some(WindowRect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    fn is_maximized(&self, handle: WindowHandle) -> Option<bool> {
        let mut placement = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowPlacement(to_hwnd(handle), &mut placement) }.ok()?;
        Some(placement.showCmd == SW_SHOWMAXIMIZED.0 as u32)
    }

    fn restore(&self, handle: WindowHandle) {
        // Return value is the previous visibility, not success.
        let _ = unsafe { ShowWindow(to_hwnd(handle), SW_RESTORE) };
    }

    fn set_window_pos(&self, handle: WindowHandle, rect: WindowRect, frame_changed: bool) -> bool {
        let mut flags = SWP_NOZORDER | SWP_NOACTIVATE;
        if frame_changed {
            flags |= SWP_FRAMECHANGED;
        }

        self.track(unsafe {
            SetWindowPos(
                to_hwnd(handle),
                None,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                flags,
            )
        })
    }

    fn move_window(&self, handle: WindowHandle, rect: WindowRect) -> bool {
        self.track(unsafe {
            MoveWindow(
                to_hwnd(handle),
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                true,
            )
        })
    }

    fn activate(&self, handle: WindowHandle) -> bool {
        unsafe { SetForegroundWindow(to_hwnd(handle)) }.as_bool()
    }

    fn last_error_code(&self) -> u32 {
        self.last_resize_error
            .get()
            .unwrap_or_else(|| unsafe { GetLastError() }.0)
    }
}
