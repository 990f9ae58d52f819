//! Tool invocation with builtin and external dispatch.
//!
//! [`ToolInvoker`] runs the compiler and linker tools of the toolchain. Two
//! dispatch strategies exist, selected once per call from the
//! configuration:
//!
//! - **builtin**: re-execute the current process image with a tool-selector
//!   token prepended to the argument list (the multiplexed-binary pattern);
//!   the host binary routes the token to its embedded tool behavior
//! - **external**: resolve the tool executable by name (configured path
//!   override first, then PATH lookup) and spawn it
//!
//! Both strategies produce identical stdio framing: stdout always streams
//! through to the host's stdout, and only linker stderr is captured for
//! diagnostic normalization.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::{debug, info};

use ferrolink_parser::parse_linker_output;

use crate::{config::InvokerConfig, error::FerrolinkError};

/// Linker names accepted by [`ToolInvoker::invoke_linker`].
pub const SUPPORTED_LINKERS: &[&str] = &["ld.lld", "wasm-ld"];

/// A tool the invoker can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// C-family compiler frontend.
    Clang,
    /// Primary native linker.
    LdLld,
    /// WebAssembly-targeting linker.
    WasmLd,
}

impl Tool {
    /// The tool-selector token for builtin dispatch. Doubles as the
    /// executable name resolved in external dispatch.
    pub fn selector(self) -> &'static str {
        match self {
            Tool::Clang => "clang",
            Tool::LdLld => "ld.lld",
            Tool::WasmLd => "wasm-ld",
        }
    }

    /// Map a selector token back to its tool.
    pub fn from_selector(token: &str) -> Option<Self> {
        match token {
            "clang" => Some(Tool::Clang),
            "ld.lld" => Some(Tool::LdLld),
            "wasm-ld" => Some(Tool::WasmLd),
            _ => None,
        }
    }

    /// Map a linker name to its tool; `None` outside the supported set.
    fn linker_from_name(name: &str) -> Option<Self> {
        match Self::from_selector(name) {
            Some(Tool::Clang) | None => None,
            Some(linker) => Some(linker),
        }
    }
}

/// Invoker for the toolchain's compiler and linker tools.
///
/// Stateless between calls: each `invoke_*` call resolves its dispatch mode,
/// runs to completion, and releases every resource it created, so separate
/// invocations may be issued concurrently by a higher-level orchestrator.
#[derive(Debug, Default, Clone)]
pub struct ToolInvoker {
    config: InvokerConfig,
}

impl ToolInvoker {
    /// Create a new invoker with the given configuration.
    pub fn new(config: InvokerConfig) -> Self {
        Self { config }
    }

    /// Run the C compiler with the given arguments.
    ///
    /// stdout and stderr stream through to the host's own standard streams;
    /// compiler diagnostics are self-describing and are not normalized.
    ///
    /// # Errors
    ///
    /// Returns an execution error if the tool cannot be resolved or
    /// started, or exits non-zero.
    pub fn invoke_compiler<I, S>(&self, args: I) -> Result<(), FerrolinkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let tool = Tool::Clang;
        let mut cmd = self.command(tool)?;
        cmd.args(args);

        info!(tool = tool.selector(); "Invoking compiler");
        let status = cmd.status().map_err(|source| FerrolinkError::Spawn {
            tool: tool.selector().to_owned(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(FerrolinkError::ToolFailed {
                tool: tool.selector().to_owned(),
                status,
            })
        }
    }

    /// Run a linker with the given name and arguments.
    ///
    /// `linker` must be one of [`SUPPORTED_LINKERS`]; any other name is
    /// rejected before any process is spawned. stdout streams through
    /// live; stderr is captured and, when the linker fails with output,
    /// normalized into a [`LinkError`](ferrolink_core::LinkError).
    ///
    /// # Errors
    ///
    /// - [`FerrolinkError::UnsupportedLinker`] for a name outside the
    ///   supported set
    /// - [`FerrolinkError::ToolNotFound`] / [`FerrolinkError::Spawn`] when
    ///   the tool cannot be resolved or started
    /// - [`FerrolinkError::ToolFailed`] when the linker fails with empty
    ///   stderr
    /// - [`FerrolinkError::Link`] when the linker fails with diagnostic
    ///   text; this path and `ToolFailed` are mutually exclusive
    pub fn invoke_linker<I, S>(&self, linker: &str, args: I) -> Result<(), FerrolinkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let Some(tool) = Tool::linker_from_name(linker) else {
            return Err(FerrolinkError::UnsupportedLinker {
                name: linker.to_owned(),
                expected: SUPPORTED_LINKERS,
            });
        };

        let mut cmd = self.command(tool)?;
        cmd.args(args);
        cmd.stdout(Stdio::inherit()).stderr(Stdio::piped());

        info!(tool = tool.selector(); "Invoking linker");
        let output = cmd.output().map_err(|source| FerrolinkError::Spawn {
            tool: tool.selector().to_owned(),
            source,
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.is_empty() {
            return Err(FerrolinkError::ToolFailed {
                tool: tool.selector().to_owned(),
                status: output.status,
            });
        }

        debug!(tool = tool.selector(), bytes = stderr.len(); "Normalizing linker stderr");
        Err(parse_linker_output(&stderr).into())
    }

    /// Whether `tool` can be dispatched without a resolution failure.
    pub fn have_tool(&self, tool: Tool) -> bool {
        self.config.builtin_tools || self.resolve_tool(tool).is_ok()
    }

    /// Resolve the executable path for a tool in external dispatch:
    /// configured override first, then PATH lookup.
    ///
    /// # Errors
    ///
    /// Returns [`FerrolinkError::ToolNotFound`] when the tool has no
    /// override and is absent from PATH.
    pub fn resolve_tool(&self, tool: Tool) -> Result<PathBuf, FerrolinkError> {
        let name = tool.selector();
        if let Some(path) = self.config.tool_paths.get(name) {
            debug!(tool = name, path = path.display().to_string(); "Using configured tool path");
            return Ok(path.clone());
        }
        which::which(name).map_err(|_| FerrolinkError::ToolNotFound {
            tool: name.to_owned(),
        })
    }

    /// Build the command for a tool under the configured dispatch mode.
    fn command(&self, tool: Tool) -> Result<Command, FerrolinkError> {
        if self.config.builtin_tools {
            let image = env::current_exe()?;
            let mut cmd = Command::new(image);
            cmd.arg(tool.selector());
            Ok(cmd)
        } else {
            Ok(Command::new(self.resolve_tool(tool)?))
        }
    }
}
