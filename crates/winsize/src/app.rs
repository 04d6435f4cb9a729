use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("winsize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resize an application window by title without stealing focus")
        .long_about(
            "winsize finds an open window by exact or partial title and resizes it in place. \
             The window that currently has focus keeps it, whatever the outcome.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Resize subcommand
        .subcommand(
            Command::new("resize")
                .about("Resize a window, keeping its top-left corner in place")
                // Positionals are optional here; arity and types are checked
                // by the host boundary so the CLI reports the same errors.
                .arg(
                    Arg::new("name")
                        .help("Window title (exact match preferred, falls back to partial)"),
                )
                .arg(
                    Arg::new("width")
                        .help("Target width in pixels")
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("height")
                        .help("Target height in pixels")
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the outcome in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        // Find subcommand
        .subcommand(
            Command::new("find")
                .about("Show which window a name resolves to, without resizing it")
                .arg(
                    Arg::new("name")
                        .help("Window title (exact match preferred, falls back to partial)")
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        // List subcommand
        .subcommand(
            Command::new("list")
                .about("List visible windows in resolution order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}
