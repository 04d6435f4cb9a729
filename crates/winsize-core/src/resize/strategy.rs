use crate::platform::WindowSystem;
use crate::window::{WindowHandle, WindowRect};

/// One way of applying a new window rectangle.
///
/// Window classes disagree on which primitive they honor, so the resizer
/// walks [`RESIZE_STRATEGIES`] in order and stops at the first success.
/// These are distinct operations, not retries of the same one.
#[derive(Debug, Clone, Copy)]
pub struct ResizeStrategy {
    pub name: &'static str,
    pub apply: fn(&dyn WindowSystem, WindowHandle, WindowRect) -> bool,
}

fn set_pos_frame_changed(system: &dyn WindowSystem, handle: WindowHandle, rect: WindowRect) -> bool {
    system.set_window_pos(handle, rect, true)
}

// Some windows mishandle the frame-changed notification.
fn set_pos(system: &dyn WindowSystem, handle: WindowHandle, rect: WindowRect) -> bool {
    system.set_window_pos(handle, rect, false)
}

// May activate the target on some window classes.
fn move_window(system: &dyn WindowSystem, handle: WindowHandle, rect: WindowRect) -> bool {
    system.move_window(handle, rect)
}

pub const RESIZE_STRATEGIES: [ResizeStrategy; 3] = [
    ResizeStrategy {
        name: "set_window_pos_frame_changed",
        apply: set_pos_frame_changed,
    },
    ResizeStrategy {
        name: "set_window_pos",
        apply: set_pos,
    },
    ResizeStrategy {
        name: "move_window",
        apply: move_window,
    },
];
