//! Diagnostic variants produced from native linker output.
//!
//! Every segmented linker error record maps onto exactly one classification
//! path: either a recognized shape producing one or more
//! [`Diagnostic::Located`] values, or exactly one [`Diagnostic::Raw`] holding
//! the verbatim record text. Keeping both outcomes in a single tagged type
//! keeps [`LinkError`](crate::LinkError) homogeneous and rendering logic
//! centralized.

use std::fmt;
use std::path::PathBuf;

/// Continuation marker used by LLD to mark lines that belong to the
/// preceding error message.
pub const CONTINUATION_MARKER: &str = ">>> ";

/// A single diagnostic extracted from linker failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A diagnostic with a known source file and line.
    Located {
        /// Source file the failure points at, native separators preserved.
        file: PathBuf,
        /// One-based source line, always positive.
        line: u32,
        /// Human-readable description of the failure.
        message: String,
    },
    /// Linker output that matched no recognized shape, preserved verbatim.
    Raw(RawDiagnostic),
}

impl Diagnostic {
    /// Create a source-located diagnostic.
    pub fn located(file: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self::Located {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a raw diagnostic from merged record text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(RawDiagnostic::new(text))
    }

    /// Returns `true` if this diagnostic carries a source location.
    pub fn is_located(&self) -> bool {
        matches!(self, Self::Located { .. })
    }
}

impl fmt::Display for Diagnostic {
    /// Renders `file:line: message` for located diagnostics and the
    /// reconstructed native presentation for raw diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Located {
                file,
                line,
                message,
            } => write!(f, "{}:{line}: {message}", file.display()),
            Self::Raw(raw) => f.write_str(&raw.original_text()),
        }
    }
}

/// A linker error that could not be mapped to a recognized shape.
///
/// Stores the merged record text: continuation markers stripped and lines
/// joined with `\n`. The native multi-line presentation can be reconstructed
/// with [`RawDiagnostic::original_text`] for faithful pass-through display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    text: String,
}

impl RawDiagnostic {
    /// Create a raw diagnostic from merged record text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The merged record text, without continuation markers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The record as the linker printed it, with the continuation marker
    /// re-inserted before every internal line break.
    pub fn original_text(&self) -> String {
        self.text
            .replace('\n', &format!("\n{CONTINUATION_MARKER}"))
    }
}
