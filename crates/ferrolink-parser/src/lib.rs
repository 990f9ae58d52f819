//! Parser for native linker failure text.
//!
//! This crate transforms the raw stderr of a failed LLD invocation into an
//! ordered sequence of [`Diagnostic`]s wrapped in a [`LinkError`]. The public
//! entry point is [`parse_linker_output`].
//!
//! Parsing happens in two stages:
//!
//! 1. [`segment`](segment::segment) splits the text into logical error
//!    records, merging lines the linker printed with the `">>> "`
//!    continuation marker back into the record they belong to.
//! 2. [`shapes`] tries each record against a table of recognized error
//!    shapes. A match can expand into several located diagnostics; a record
//!    matching no shape becomes exactly one raw diagnostic preserving the
//!    original text.
//!
//! The parser is a pure function of its input: no environment, clock, or
//! call-history dependence. A no-match is a fully supported outcome, never a
//! parser error, so every non-empty input yields a non-empty result.

mod segment;
mod shapes;

#[cfg(test)]
mod parser_tests;

use log::debug;

use ferrolink_core::{Diagnostic, LinkError};

/// Parse captured linker stderr into an ordered, non-empty [`LinkError`].
///
/// Recognized error shapes produce [`Diagnostic::Located`] entries; anything
/// else is preserved verbatim as [`Diagnostic::Raw`]. Diagnostics appear in
/// the order they were discovered in `text`.
pub fn parse_linker_output(text: &str) -> LinkError {
    let records = segment::segment(text);
    debug!(records = records.len(); "Segmented linker output");

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut index = 0;
    while index < records.len() {
        match shapes::recognize(&records[index..]) {
            Some(found) => {
                diagnostics.extend(found.diagnostics);
                index += found.consumed;
            }
            None => {
                diagnostics.push(Diagnostic::raw(records[index].text()));
                index += 1;
            }
        }
    }

    debug!(diagnostics = diagnostics.len(); "Classified linker output");
    LinkError::new(diagnostics)
}
