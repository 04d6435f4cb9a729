//! Scripted in-memory window manager for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::window::{Size, WindowError, WindowHandle, WindowRecord, WindowRect};

use super::WindowSystem;

/// Every primitive the fake saw, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    FindExact(String),
    Enumerate,
    Foreground,
    IsWindow(WindowHandle),
    Rect(WindowHandle),
    Placement(WindowHandle),
    Restore(WindowHandle),
    Settle(Duration),
    SetPos {
        handle: WindowHandle,
        rect: WindowRect,
        frame_changed: bool,
    },
    Move {
        handle: WindowHandle,
        rect: WindowRect,
    },
    Activate(WindowHandle),
    LastError,
}

/// Which resize primitive to break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Primitive {
    SetPosFrameChanged,
    SetPos,
    Move,
}

#[derive(Debug, Default)]
pub(crate) struct FakeWindowSystem {
    exact: HashMap<String, WindowHandle>,
    records: Vec<WindowRecord>,
    enumeration_error: bool,
    live: RefCell<HashSet<WindowHandle>>,
    rects: RefCell<HashMap<WindowHandle, WindowRect>>,
    maximized: RefCell<HashSet<WindowHandle>>,
    placement_unreadable: bool,
    failing: HashSet<Primitive>,
    panicking: Option<Primitive>,
    min_size: Option<Size>,
    unreadable_after_resize: bool,
    close_on_resize: Option<WindowHandle>,
    last_error: u32,
    focus: Cell<Option<WindowHandle>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeWindowSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a live window. It is also listed by enumeration and found
    /// by exact title.
    pub(crate) fn with_window(mut self, raw: isize, title: &str, rect: WindowRect) -> Self {
        let handle = WindowHandle::from_raw(raw);
        self.exact.entry(title.to_string()).or_insert(handle);
        self.records.push(WindowRecord::new(handle, title));
        self.live.get_mut().insert(handle);
        self.rects.get_mut().insert(handle, rect);
        self
    }

    /// Register a window that only shows up in enumeration, never through the
    /// exact-title lookup
    pub(crate) fn with_listed_window(mut self, raw: isize, title: &str, rect: WindowRect) -> Self {
        let handle = WindowHandle::from_raw(raw);
        self.records.push(WindowRecord::new(handle, title));
        self.live.get_mut().insert(handle);
        self.rects.get_mut().insert(handle, rect);
        self
    }

    pub(crate) fn with_focus(self, raw: isize) -> Self {
        self.focus.set(Some(WindowHandle::from_raw(raw)));
        self
    }

    pub(crate) fn with_maximized(mut self, raw: isize) -> Self {
        self.maximized.get_mut().insert(WindowHandle::from_raw(raw));
        self
    }

    /// Keep the window live but make its rectangle unreadable
    pub(crate) fn with_rect_unreadable(mut self, raw: isize) -> Self {
        self.rects.get_mut().remove(&WindowHandle::from_raw(raw));
        self
    }

    pub(crate) fn with_enumeration_error(mut self) -> Self {
        self.enumeration_error = true;
        self
    }

    pub(crate) fn with_placement_unreadable(mut self) -> Self {
        self.placement_unreadable = true;
        self
    }

    pub(crate) fn with_failing(mut self, primitive: Primitive) -> Self {
        self.failing.insert(primitive);
        self
    }

    pub(crate) fn with_panicking(mut self, primitive: Primitive) -> Self {
        self.panicking = Some(primitive);
        self
    }

    pub(crate) fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = Some(size);
        self
    }

    pub(crate) fn with_unreadable_after_resize(mut self) -> Self {
        self.unreadable_after_resize = true;
        self
    }

    /// Close the given window as soon as any resize primitive runs
    pub(crate) fn with_close_on_resize(mut self, raw: isize) -> Self {
        self.close_on_resize = Some(WindowHandle::from_raw(raw));
        self
    }

    pub(crate) fn with_last_error(mut self, code: u32) -> Self {
        self.last_error = code;
        self
    }

    /// Close a window now, leaving stale handles behind
    pub(crate) fn close(&self, raw: isize) {
        let handle = WindowHandle::from_raw(raw);
        self.live.borrow_mut().remove(&handle);
        self.rects.borrow_mut().remove(&handle);
    }

    pub(crate) fn focused(&self) -> Option<WindowHandle> {
        self.focus.get()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn resize_attempts(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::SetPos { .. } | Call::Move { .. }))
            .count()
    }

    pub(crate) fn rect_of(&self, raw: isize) -> Option<WindowRect> {
        self.rects.borrow().get(&WindowHandle::from_raw(raw)).copied()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn apply_resize(&self, primitive: Primitive, handle: WindowHandle, rect: WindowRect) -> bool {
        if self.panicking == Some(primitive) {
            panic!("simulated fault in {primitive:?}");
        }
        if let Some(closing) = self.close_on_resize {
            self.close(closing.raw());
        }
        if self.failing.contains(&primitive) || !self.live.borrow().contains(&handle) {
            return false;
        }

        let applied = match self.min_size {
            Some(min) => rect.with_size(Size::new(
                rect.width().max(min.width),
                rect.height().max(min.height),
            )),
            None => rect,
        };
        self.rects.borrow_mut().insert(handle, applied);
        true
    }

    fn resize_ran(&self) -> bool {
        self.resize_attempts() > 0
    }
}

impl WindowSystem for FakeWindowSystem {
    fn find_by_exact_title(&self, title: &str) -> Option<WindowHandle> {
        self.record(Call::FindExact(title.to_string()));
        self.exact
            .get(title)
            .copied()
            .filter(|h| self.live.borrow().contains(h))
    }

    fn enumerate_windows(&self) -> Result<Vec<WindowRecord>, WindowError> {
        self.record(Call::Enumerate);
        if self.enumeration_error {
            return Err(WindowError::EnumerationFailed {
                message: "simulated enumeration failure".to_string(),
            });
        }
        Ok(self.records.clone())
    }

    fn foreground_window(&self) -> Option<WindowHandle> {
        self.record(Call::Foreground);
        self.focus.get()
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        self.record(Call::IsWindow(handle));
        self.live.borrow().contains(&handle)
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<WindowRect> {
        self.record(Call::Rect(handle));
        if self.unreadable_after_resize && self.resize_ran() {
            return None;
        }
        self.rects.borrow().get(&handle).copied()
    }

    fn is_maximized(&self, handle: WindowHandle) -> Option<bool> {
        self.record(Call::Placement(handle));
        if self.placement_unreadable {
            return None;
        }
        Some(self.maximized.borrow().contains(&handle))
    }

    fn restore(&self, handle: WindowHandle) {
        self.record(Call::Restore(handle));
        self.maximized.borrow_mut().remove(&handle);
    }

    fn set_window_pos(&self, handle: WindowHandle, rect: WindowRect, frame_changed: bool) -> bool {
        self.record(Call::SetPos {
            handle,
            rect,
            frame_changed,
        });
        let primitive = if frame_changed {
            Primitive::SetPosFrameChanged
        } else {
            Primitive::SetPos
        };
        self.apply_resize(primitive, handle, rect)
    }

    fn move_window(&self, handle: WindowHandle, rect: WindowRect) -> bool {
        self.record(Call::Move { handle, rect });
        let moved = self.apply_resize(Primitive::Move, handle, rect);
        if moved {
            // Some window classes activate on MoveWindow.
            self.focus.set(Some(handle));
        }
        moved
    }

    fn activate(&self, handle: WindowHandle) -> bool {
        self.record(Call::Activate(handle));
        if !self.live.borrow().contains(&handle) {
            return false;
        }
        self.focus.set(Some(handle));
        true
    }

    fn last_error_code(&self) -> u32 {
        self.record(Call::LastError);
        self.last_error
    }

    fn settle(&self, delay: Duration) {
        self.record(Call::Settle(delay));
    }
}
