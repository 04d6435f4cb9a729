use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{error, info, warn};

use super::errors::ArgumentError;
use super::types::HostValue;
use crate::platform::{self, WindowSystem};
use crate::resize::{ResizeOutcome, ResizeRequest, resize_by_name};

/// Host entry point: `(name: text, width: number, height: number) -> text`.
///
/// Malformed calls are the only `Err`. Every operational failure, including
/// a fault inside the platform layer, comes back as descriptive text.
pub fn resize_window(args: &[HostValue]) -> Result<String, ArgumentError> {
    let system = platform::native();
    resize_window_with(&system, args)
}

/// [`resize_window`] against an explicit window system
pub fn resize_window_with(
    system: &dyn WindowSystem,
    args: &[HostValue],
) -> Result<String, ArgumentError> {
    resize_outcome_with(system, args).map(|outcome| outcome.to_string())
}

/// Same as [`resize_window_with`], but hands back the structured outcome
/// instead of its text.
pub fn resize_outcome_with(
    system: &dyn WindowSystem,
    args: &[HostValue],
) -> Result<ResizeOutcome, ArgumentError> {
    info!(event = "host.resize_window_started", arg_count = args.len());

    let request = parse_arguments(args).inspect_err(|e| {
        warn!(event = "host.resize_window_rejected", error = %e);
    })?;

    let outcome = run_guarded(system, &request);

    info!(
        event = "host.resize_window_completed",
        name = request.name,
        category = outcome.category()
    );
    Ok(outcome)
}

/// Validate host arguments into a request. Arguments past the third are
/// ignored.
pub fn parse_arguments(args: &[HostValue]) -> Result<ResizeRequest, ArgumentError> {
    let [name, width, height, ..] = args else {
        return Err(ArgumentError::MissingArguments {
            received: args.len(),
        });
    };

    match (name.as_text(), width.as_i32(), height.as_i32()) {
        (Some(name), Some(width), Some(height)) => Ok(ResizeRequest::new(name, width, height)),
        _ => Err(ArgumentError::InvalidTypes),
    }
}

/// Run a request, turning any panic into an internal-error outcome
pub fn run_guarded(system: &dyn WindowSystem, request: &ResizeRequest) -> ResizeOutcome {
    catch_unwind(AssertUnwindSafe(|| resize_by_name(system, request))).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        error!(
            event = "host.resize_window_panicked",
            name = request.name,
            message = message
        );
        ResizeOutcome::InternalError {
            name: request.name.clone(),
            message,
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_string()
    }
}
