use clap::ArgMatches;
use tracing::{error, info, warn};

use winsize_core::errors::WinsizeError;
use winsize_core::events;
use winsize_core::host::{HostValue, resize_outcome_with};
use winsize_core::platform;
use winsize_core::window::{list_windows, resolve};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("resize", sub_matches)) => handle_resize_command(sub_matches),
        Some(("find", sub_matches)) => handle_find_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Turn raw CLI strings into host values. The name is always text;
/// dimensions become numbers when they parse as one.
fn host_arguments(matches: &ArgMatches) -> Vec<HostValue> {
    let name = matches
        .get_one::<String>("name")
        .map(|name| HostValue::Text(name.clone()));
    let dimensions = ["width", "height"]
        .into_iter()
        .map(|id| matches.get_one::<String>(id).map(|raw| numeric_or_text(raw)));

    std::iter::once(name).chain(dimensions).flatten().collect()
}

fn numeric_or_text(raw: &str) -> HostValue {
    match raw.trim().parse::<f64>() {
        Ok(number) => HostValue::Number(number),
        Err(_) => HostValue::Text(raw.to_string()),
    }
}

fn handle_resize_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let args = host_arguments(matches);

    info!(
        event = "cli.resize_started",
        arg_count = args.len(),
        json_output = json_output
    );

    let system = platform::native();
    let outcome = match resize_outcome_with(&system, &args) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.resize_rejected", error = %e, code = e.error_code());
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome);
    }

    if outcome.is_success() {
        info!(
            event = "cli.resize_completed",
            name = outcome.name(),
            category = outcome.category()
        );
        Ok(())
    } else {
        warn!(
            event = "cli.resize_failed",
            name = outcome.name(),
            category = outcome.category()
        );
        // Exit with code 1 so scripts can branch on failure
        std::process::exit(1);
    }
}

fn handle_find_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Window name is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.find_started", name = name, json_output = json_output);

    let system = platform::native();
    match resolve(&system, name) {
        Ok(handle) => {
            let title = list_windows(&system)
                .ok()
                .and_then(|windows| windows.into_iter().find(|w| w.handle == handle))
                .map(|w| w.title);

            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "query": name,
                        "handle": handle,
                        "title": title,
                    }))?
                );
            } else {
                println!("Window '{}' resolves to:", name);
                println!("  Handle: {}", handle);
                if let Some(title) = &title {
                    println!("  Title: {}", title);
                }
            }

            info!(event = "cli.find_completed", name = name, handle = %handle);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.find_failed", error = %e, code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_windows_started", json_output = json_output);

    let system = platform::native();
    match list_windows(&system) {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No visible windows found.");
            } else {
                println!("Visible windows:");
                table::print_windows_table(&windows);
            }

            info!(event = "cli.list_windows_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_windows_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
