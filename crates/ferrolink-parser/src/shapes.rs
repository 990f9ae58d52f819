//! Recognized linker error shapes.
//!
//! Matching native linker diagnostics against fixed textual shapes is
//! version-fragile, so all recognized shapes live behind the [`SHAPES`]
//! table and new ones can be added without touching segmentation or
//! invocation logic. A record matching no shape is a fully supported
//! outcome handled by the caller, never an error here.

use std::path::PathBuf;

use winnow::{
    ModalResult, Parser,
    ascii::dec_uint,
    combinator::preceded,
    token::{rest, take_until},
};

use ferrolink_core::Diagnostic;

use crate::segment::Record;

/// Diagnostics produced by a shape, plus how many records it consumed.
pub(crate) struct ShapeMatch {
    pub(crate) consumed: usize,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

type ShapeFn = fn(&[Record]) -> Option<ShapeMatch>;

/// Recognized shapes, tried in order against the remaining records.
const SHAPES: &[ShapeFn] = &[undefined_symbol];

/// Try each recognized shape against the records starting at the front of
/// `records`. Returns the first match, or `None` if the leading record
/// should fall back to a raw diagnostic.
pub(crate) fn recognize(records: &[Record]) -> Option<ShapeMatch> {
    SHAPES.iter().find_map(|shape| shape(records))
}

/// `<tool>: error: undefined symbol: <name>` followed by reference lines.
///
/// Each reference carrying a `file:line` source location yields one located
/// diagnostic, in the order the references appear; a single record can thus
/// expand into several diagnostics. Reference lines that appear as records
/// of their own (the continuation marker is not printed by every linker
/// version) are folded in as long as every line still resolves to a
/// location. A header with no resolvable reference falls back to raw so the
/// symbol name is not reported without a position it was never given.
fn undefined_symbol(records: &[Record]) -> Option<ShapeMatch> {
    let record = records.first()?;
    let mut lines = record.lines();
    let symbol = undefined_symbol_header.parse(lines.next()?).ok()?;
    let message = format!("linker could not find symbol {symbol}");

    let mut diagnostics: Vec<Diagnostic> = lines
        .filter_map(reference_location)
        .map(|(file, line)| Diagnostic::located(file, line, message.clone()))
        .collect();

    let mut consumed = 1;
    for follower in &records[1..] {
        if !follower
            .lines()
            .next()
            .is_some_and(|line| line.contains("referenced by"))
        {
            break;
        }
        let locations: Vec<Option<(PathBuf, u32)>> =
            follower.lines().map(reference_location).collect();
        if locations.iter().any(Option::is_none) {
            break;
        }
        diagnostics.extend(
            locations
                .into_iter()
                .flatten()
                .map(|(file, line)| Diagnostic::located(file, line, message.clone())),
        );
        consumed += 1;
    }

    if diagnostics.is_empty() {
        return None;
    }
    Some(ShapeMatch {
        consumed,
        diagnostics,
    })
}

/// Parse an undefined-symbol header line, returning the symbol name.
fn undefined_symbol_header(input: &mut &str) -> ModalResult<String> {
    preceded(
        (
            take_until(0.., "error: undefined symbol: "),
            "error: undefined symbol: ",
        ),
        rest,
    )
    .map(str::to_owned)
    .parse_next(input)
}

/// Extract the source location from a reference line, if it has one.
///
/// Two accepted forms:
/// - `referenced by … (<file>:<line>)` — the location sits in the last
///   parenthesized group of the line
/// - a bare `<file>:<line>` continuation detail line
///
/// Reference lines whose parenthesized group is not a source location
/// (section+offset forms like `(.text+0x10)`) yield nothing.
fn reference_location(line: &str) -> Option<(PathBuf, u32)> {
    if line.contains("referenced by") {
        let open = line.rfind('(')?;
        let close = open + line[open..].find(')')?;
        parse_location(&line[open + 1..close])
    } else {
        parse_location(line.trim())
    }
}

/// Parse `<file>:<line>` with a positive line number.
///
/// The split is on the last colon so Windows drive prefixes stay part of
/// the file path.
fn parse_location(text: &str) -> Option<(PathBuf, u32)> {
    let (file, line) = text.rsplit_once(':')?;
    let line: u32 = line_number.parse(line).ok()?;
    if line == 0 || file.is_empty() {
        return None;
    }
    if file
        .chars()
        .any(|c| c.is_whitespace() || c == '(' || c == ')')
    {
        return None;
    }
    Some((PathBuf::from(file), line))
}

fn line_number(input: &mut &str) -> ModalResult<u32> {
    dec_uint.parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_extracts_symbol_name() {
        let symbol = undefined_symbol_header
            .parse("ld.lld: error: undefined symbol: foo")
            .unwrap();
        assert_eq!(symbol, "foo");
    }

    #[test]
    fn test_header_accepts_wasm_ld_prefix() {
        let symbol = undefined_symbol_header
            .parse("wasm-ld: error: undefined symbol: env.host_call")
            .unwrap();
        assert_eq!(symbol, "env.host_call");
    }

    #[test]
    fn test_header_rejects_other_errors() {
        assert!(
            undefined_symbol_header
                .parse("ld.lld: error: duplicate symbol: foo")
                .is_err()
        );
    }

    #[test]
    fn test_reference_with_parenthesized_location() {
        let (file, line) = reference_location("referenced by main.o (src/main.c:17)").unwrap();
        assert_eq!(file, PathBuf::from("src/main.c"));
        assert_eq!(line, 17);
    }

    #[test]
    fn test_reference_with_section_offset_yields_nothing() {
        assert!(reference_location("referenced by obj.o:(.text+0x10)").is_none());
    }

    #[test]
    fn test_bare_location_line() {
        let (file, line) = reference_location("main.c:42").unwrap();
        assert_eq!(file, PathBuf::from("main.c"));
        assert_eq!(line, 42);
    }

    #[test]
    fn test_bare_line_with_spaces_is_not_a_location() {
        assert!(reference_location("collect2: error: ld returned 1 exit status").is_none());
    }

    #[test]
    fn test_zero_line_number_rejected() {
        assert!(reference_location("main.c:0").is_none());
    }

    #[test]
    fn test_windows_drive_prefix_stays_in_path() {
        let (file, line) = reference_location(r"C:\src\main.c:7").unwrap();
        assert_eq!(file, PathBuf::from(r"C:\src\main.c"));
        assert_eq!(line, 7);
    }
}
