//! Error adapter for converting FerrolinkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`ferrolink::LinkError`] contains multiple diagnostics, each
//! diagnostic is rendered independently, in discovery order. Nothing is
//! reordered, deduplicated, or truncated.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use ferrolink::{Diagnostic, FerrolinkError};

/// Adapter for a single linker diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic) -> Self {
        Self { diag }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag)
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.diag {
            Diagnostic::Located { .. } => "ferrolink::link::undefined-symbol",
            Diagnostic::Raw(_) => "ferrolink::link",
        };
        Some(Box::new(code))
    }
}

/// Adapter for non-link [`FerrolinkError`] variants.
///
/// This adapter handles errors that don't carry linker diagnostics, such as
/// configuration, resolution, and execution errors.
pub struct ErrorAdapter<'a>(pub &'a FerrolinkError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FerrolinkError::Io(_) => "ferrolink::io",
            FerrolinkError::UnsupportedLinker { .. } => "ferrolink::config",
            FerrolinkError::ToolNotFound { .. } => "ferrolink::lookup",
            FerrolinkError::Spawn { .. } | FerrolinkError::ToolFailed { .. } => "ferrolink::exec",
            FerrolinkError::Link(_) => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FerrolinkError::UnsupportedLinker { expected, .. } => Some(Box::new(format!(
                "supported linkers: {}",
                expected.join(", ")
            ))),
            FerrolinkError::ToolNotFound { tool } => Some(Box::new(format!(
                "install {tool} or pin its path in the configuration file"
            ))),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single linker diagnostic or a non-link error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One linker diagnostic out of a link failure.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A configuration, resolution, or execution error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`FerrolinkError`] into a list of reportable errors.
///
/// For [`FerrolinkError::Link`], this returns one [`Reportable`] for each
/// diagnostic in the error, preserving discovery order. For other error
/// variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &FerrolinkError) -> Vec<Reportable<'_>> {
    match err {
        FerrolinkError::Link(link_err) => link_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use ferrolink::LinkError;

    use super::*;

    #[test]
    fn test_link_error_yields_one_reportable_per_diagnostic() {
        let link_err = LinkError::new(vec![
            Diagnostic::located("a.c", 10, "linker could not find symbol foo"),
            Diagnostic::located("b.c", 20, "linker could not find symbol foo"),
            Diagnostic::raw("ld.lld: error: too many errors emitted"),
        ]);
        let err = FerrolinkError::Link(link_err);

        let reportables = to_reportables(&err);

        // Each diagnostic is separate, in discovery order
        assert_eq!(reportables.len(), 3);
        assert_eq!(
            reportables[0].to_string(),
            "a.c:10: linker could not find symbol foo"
        );
        assert_eq!(
            reportables[1].to_string(),
            "b.c:20: linker could not find symbol foo"
        );
        assert_eq!(
            reportables[2].to_string(),
            "ld.lld: error: too many errors emitted"
        );
    }

    #[test]
    fn test_raw_diagnostic_renders_reconstructed_text() {
        let link_err = LinkError::from(Diagnostic::raw(
            "ld.lld: error: duplicate symbol: init\ndefined at a.c",
        ));
        let err = FerrolinkError::Link(link_err);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "ld.lld: error: duplicate symbol: init\n>>> defined at a.c"
        );
    }

    #[test]
    fn test_non_link_error_yields_single_reportable() {
        let err = FerrolinkError::ToolNotFound {
            tool: "wasm-ld".to_string(),
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "could not find `wasm-ld` on PATH");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_unsupported_linker_help_names_expected_set() {
        let err = FerrolinkError::UnsupportedLinker {
            name: "gold".to_string(),
            expected: ferrolink::SUPPORTED_LINKERS,
        };

        let reportables = to_reportables(&err);
        let help = reportables[0].help().unwrap().to_string();
        assert_eq!(help, "supported linkers: ld.lld, wasm-ld");
    }
}
