//! CLI logic for the ferrolink tool driver.
//!
//! The binary is multiplexed: invoked with a tool-selector token as its
//! first argument it acts as that tool (the builtin-dispatch contract),
//! otherwise it parses a driver command line and invokes tools through
//! [`ToolInvoker`].

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, ToolCommand};

use std::ffi::OsString;
use std::process::Command;

use log::{debug, info};

use ferrolink::{FerrolinkError, Tool, ToolInvoker};

/// Run the ferrolink driver.
///
/// # Errors
///
/// Returns `FerrolinkError` for:
/// - Configuration loading errors
/// - Tool resolution and execution errors
/// - Linker failures, as a [`ferrolink::LinkError`] carrying every
///   extracted diagnostic
pub fn run(args: &Args) -> Result<(), FerrolinkError> {
    let invoker_config = config::load_config(args.config.as_ref())?;
    let invoker = ToolInvoker::new(invoker_config);

    match &args.command {
        ToolCommand::Cc { args } => {
            info!(arg_count = args.len(); "Driving compiler");
            invoker.invoke_compiler(args)
        }
        ToolCommand::Ld { linker, args } => {
            info!(linker = linker.as_str(), arg_count = args.len(); "Driving linker");
            invoker.invoke_linker(linker, args)
        }
    }
}

/// Act as the embedded tool named by a selector token.
///
/// The driver does not carry its own copies of clang and lld; the embedded
/// behavior resolves the external executable and delegates to it with all
/// standard streams inherited, so both dispatch modes produce identical
/// stdio framing. Returns the exit code to terminate with.
pub fn run_embedded(tool: Tool, args: &[OsString]) -> i32 {
    // Resolution here is always external; builtin dispatch re-entering this
    // path with builtin dispatch again would recurse forever.
    let invoker = ToolInvoker::default();
    let executable = match invoker.resolve_tool(tool) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("ferrolink: {err}");
            return 127;
        }
    };

    debug!(tool = tool.selector(), executable = executable.display().to_string(); "Delegating to external tool");
    match Command::new(executable).args(args).status() {
        Ok(status) => status.code().unwrap_or(1),
        Err(err) => {
            eprintln!("ferrolink: failed to run {}: {err}", tool.selector());
            1
        }
    }
}
