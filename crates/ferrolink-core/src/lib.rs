//! Core diagnostic model for the ferrolink toolchain layer.
//!
//! This crate defines the types shared between the linker output parser and
//! the tool invocation facade:
//!
//! - [`Diagnostic`]: a single tagged diagnostic, either source-located or
//!   verbatim raw linker text
//! - [`RawDiagnostic`]: the raw variant's payload, able to reconstruct the
//!   native multi-line linker presentation
//! - [`LinkError`]: an ordered, non-empty collection of diagnostics
//!   reported as one logical link failure

mod diagnostic;
mod link_error;

pub use diagnostic::{CONTINUATION_MARKER, Diagnostic, RawDiagnostic};
pub use link_error::LinkError;
