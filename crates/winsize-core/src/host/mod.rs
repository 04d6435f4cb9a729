//! Boundary with the host scripting environment.
//!
//! The host passes loosely-typed values and gets text back. Argument
//! validation happens here and is the only failure surfaced as an error.

mod errors;
mod handler;
mod types;

pub use errors::ArgumentError;
pub use handler::{
    parse_arguments, resize_outcome_with, resize_window, resize_window_with, run_guarded,
};
pub use types::HostValue;
