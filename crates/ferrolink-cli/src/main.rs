//! Ferrolink CLI entry point.

use std::{env, ffi::OsString, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use ferrolink::Tool;
use ferrolink_cli::{Args, error_adapter::to_reportables};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Tool-selector tokens are routed before clap sees the command line:
    // builtin dispatch re-executes this image with the token prepended, and
    // the tool's own arguments must not be interpreted as driver arguments.
    let argv: Vec<OsString> = env::args_os().skip(1).collect();
    if let Some(tool) = argv
        .first()
        .and_then(|token| token.to_str())
        .and_then(Tool::from_selector)
    {
        process::exit(ferrolink_cli::run_embedded(tool, &argv[1..]));
    }

    // Parse configuration first
    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting ferrolink");
    debug!(args:?; "Parsed arguments");

    // Run the driver
    if let Err(err) = ferrolink_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // Render each diagnostic independently, in discovery order. Every
        // entry is shown: suppressing one would hide a distinct failure
        // cause, so rendering bypasses the log filter.
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &reportable)
                .expect("Writing to String buffer is infallible");

            eprintln!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
