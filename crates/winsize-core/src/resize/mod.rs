mod focus;
mod handler;
mod strategy;
mod types;

pub use handler::{RESTORE_SETTLE_DELAY, resize, resize_by_name};
pub use strategy::{RESIZE_STRATEGIES, ResizeStrategy};
pub use types::{ResizeOutcome, ResizeRequest};
