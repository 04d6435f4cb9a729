use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crate targets whose events are governed by the quiet/verbose switch.
const LOG_TARGETS: [&str; 2] = ["winsize", "winsize_core"];

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Other `RUST_LOG` directives are honored alongside these.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    let filter = LOG_TARGETS
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, target| {
            filter.add_directive(
                format!("{target}={level}")
                    .parse()
                    .expect("Invalid log directive"),
            )
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
