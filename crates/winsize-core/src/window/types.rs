use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a top-level window owned by the window manager.
///
/// The handle is only borrowed from the OS and may go stale at any moment
/// (the window can close), so every consumer must tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A window discovered during one enumeration pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub handle: WindowHandle,
    pub title: String,
}

impl WindowRecord {
    pub fn new(handle: WindowHandle, title: impl Into<String>) -> Self {
        Self {
            handle,
            title: title.into(),
        }
    }
}

/// Window bounding rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle at the given origin with the given extent
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left.wrapping_add(width),
            bottom: top.wrapping_add(height),
        }
    }

    pub const fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub const fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    pub const fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Same top-left corner, new extent
    pub const fn with_size(&self, size: Size) -> Self {
        Self::from_origin(self.left, self.top, size.width, size.height)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Information about a visible window, for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Window handle, rendered as hex in tables
    pub handle: WindowHandle,
    /// Window title
    pub title: String,
    /// Current bounding rectangle, if it could be read
    pub rect: Option<WindowRect>,
}
