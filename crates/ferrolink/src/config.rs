//! Invoker configuration.
//!
//! [`InvokerConfig`] selects the dispatch strategy and optionally pins tool
//! executables to explicit paths. The configuration is resolved once per
//! invocation; dispatch modes are never mixed within a single call.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a [`ToolInvoker`](crate::ToolInvoker).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Dispatch tools by re-executing the current process image with a
    /// tool-selector token prepended to the arguments, instead of resolving
    /// external executables. Requires the host binary to recognize the
    /// selector tokens.
    pub builtin_tools: bool,

    /// Explicit per-tool executable paths, keyed by tool name. An entry
    /// here overrides PATH lookup for that tool in external dispatch.
    pub tool_paths: BTreeMap<String, PathBuf>,
}

impl InvokerConfig {
    /// Enable or disable builtin-tool dispatch.
    pub fn with_builtin_tools(mut self, builtin_tools: bool) -> Self {
        self.builtin_tools = builtin_tools;
        self
    }

    /// Pin a tool to an explicit executable path.
    pub fn with_tool_path(mut self, tool: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.tool_paths.insert(tool.into(), path.into());
        self
    }
}
