//! Locate an application window by name and resize it without stealing
//! input focus from the window the user is working in.

pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod platform;
pub mod resize;
pub mod window;

pub use host::{ArgumentError, HostValue, resize_window};
pub use logging::init_logging;
pub use resize::{ResizeOutcome, ResizeRequest};
