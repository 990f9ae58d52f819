//! The LinkError type for wrapping linker diagnostics.
//!
//! [`LinkError`] wraps one or more [`Diagnostic`]s extracted from a single
//! failed linker invocation.

use std::fmt;

use crate::Diagnostic;

/// Error type for a failed link.
///
/// An ordered, non-empty sequence of diagnostics representing one logical
/// failure. Order equals the order in which the diagnostics were discovered
/// in the linker output; callers must iterate every entry rather than assume
/// a single cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkError {
    diagnostics: Vec<Diagnostic>,
}

impl LinkError {
    /// Create a new link error from diagnostics.
    ///
    /// `diagnostics` must be non-empty: a failure without any diagnostic is
    /// not a link error, it is an execution error.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        debug_assert!(
            !diagnostics.is_empty(),
            "a LinkError must carry at least one diagnostic"
        );
        Self { diagnostics }
    }

    /// Get all diagnostics in this error, in discovery order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for LinkError {}

impl From<Diagnostic> for LinkError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}
