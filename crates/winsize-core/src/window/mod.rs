mod errors;
mod handler;
mod types;

pub use errors::WindowError;
pub use handler::{list_windows, resolve, title_matches};
pub use types::{Size, WindowHandle, WindowInfo, WindowRecord, WindowRect};
