//! Ferrolink - toolchain invocation and linker diagnostic normalization.
//!
//! This crate is the layer of a cross-compiling toolchain that runs a
//! native C-family compiler and a native linker as subordinate tools,
//! captures their output, and converts raw linker failure text into
//! structured, source-located diagnostics.
//!
//! # Primary Usage
//!
//! ```rust,no_run
//! use ferrolink::{FerrolinkError, InvokerConfig, ToolInvoker};
//!
//! let invoker = ToolInvoker::new(InvokerConfig::default());
//!
//! invoker.invoke_compiler(["-c", "main.c", "-o", "main.o"])?;
//!
//! if let Err(FerrolinkError::Link(link_err)) =
//!     invoker.invoke_linker("ld.lld", ["main.o", "-o", "main"])
//! {
//!     for diagnostic in link_err.diagnostics() {
//!         eprintln!("{diagnostic}");
//!     }
//! }
//! # Ok::<(), ferrolink::FerrolinkError>(())
//! ```
//!
//! Each invocation is synchronous and blocking, shares no state with other
//! invocations, and performs no retries; scheduling policy belongs to the
//! calling build orchestrator.

pub mod config;

mod error;
mod invoker;

pub use ferrolink_core::{CONTINUATION_MARKER, Diagnostic, LinkError, RawDiagnostic};
pub use ferrolink_parser::parse_linker_output;

pub use config::InvokerConfig;
pub use error::FerrolinkError;
pub use invoker::{SUPPORTED_LINKERS, Tool, ToolInvoker};
