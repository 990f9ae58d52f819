//! Command-line argument definitions for the ferrolink CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Tool-selector tokens are routed before clap runs (see
//! the binary entry point); these definitions cover the driver surface.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// Command-line arguments for the ferrolink tool driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: ToolCommand,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Tool to drive.
#[derive(Subcommand, Debug)]
pub enum ToolCommand {
    /// Run the C compiler frontend
    Cc {
        /// Arguments passed verbatim to the compiler
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
    /// Run a linker
    Ld {
        /// Linker to run (ld.lld or wasm-ld)
        #[arg(short, long, default_value = "ld.lld")]
        linker: String,

        /// Arguments passed verbatim to the linker
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },
}
