//! Error types for tool invocation.
//!
//! This module provides the main error type [`FerrolinkError`]. The variants
//! fall into three families with distinct caller contracts:
//!
//! - configuration errors ([`FerrolinkError::UnsupportedLinker`]): caller
//!   invariant violations, rejected before any process is spawned
//! - execution errors ([`FerrolinkError::ToolNotFound`],
//!   [`FerrolinkError::Spawn`], [`FerrolinkError::ToolFailed`]): the tool
//!   could not be resolved, started, or exited non-zero without usable
//!   diagnostic text
//! - [`FerrolinkError::Link`]: the linker failed with diagnostic text; the
//!   wrapped [`LinkError`] carries every extracted diagnostic and callers
//!   must iterate them rather than assume a single cause

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use ferrolink_core::LinkError;

/// The main error type for ferrolink operations.
#[derive(Debug, Error)]
pub enum FerrolinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The caller asked for a linker outside the supported set.
    #[error("unsupported linker `{name}`: expected one of {expected:?}")]
    UnsupportedLinker {
        name: String,
        expected: &'static [&'static str],
    },

    /// External dispatch could not resolve the tool executable.
    #[error("could not find `{tool}` on PATH")]
    ToolNotFound { tool: String },

    /// The tool process could not be started.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but failed without producing parseable diagnostics.
    #[error("{tool} exited with {status}")]
    ToolFailed { tool: String, status: ExitStatus },

    /// The linker failed with diagnostic output; never constructed with an
    /// empty diagnostic list.
    #[error("{0}")]
    Link(#[from] LinkError),
}
