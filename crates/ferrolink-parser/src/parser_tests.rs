//! End-to-end tests for linker output parsing.
//!
//! These exercise the full segmentation + classification pipeline on
//! realistic LLD stderr captures, including the fallback and round-trip
//! guarantees for unrecognized output.

use std::path::PathBuf;

use proptest::prelude::*;

use ferrolink_core::Diagnostic;

use crate::parse_linker_output;

fn located(diag: &Diagnostic) -> (&PathBuf, u32, &str) {
    match diag {
        Diagnostic::Located {
            file,
            line,
            message,
        } => (file, *line, message.as_str()),
        Diagnostic::Raw(raw) => panic!("expected located diagnostic, got raw: {:?}", raw),
    }
}

#[test]
fn test_undefined_symbol_single_reference() {
    let err = parse_linker_output("ld.lld: error: undefined symbol: foo\nreferenced by (a.c:10)\n");

    assert_eq!(err.diagnostics().len(), 1);
    let (file, line, message) = located(&err.diagnostics()[0]);
    assert_eq!(file, &PathBuf::from("a.c"));
    assert_eq!(line, 10);
    assert_eq!(message, "linker could not find symbol foo");
}

#[test]
fn test_undefined_symbol_two_references_in_order() {
    let err = parse_linker_output(
        "ld.lld: error: undefined symbol: foo\n\
         >>> referenced by main.o (a.c:10)\n\
         >>> referenced by util.o (b.c:20)\n",
    );

    assert_eq!(err.diagnostics().len(), 2);
    let (file_a, line_a, message_a) = located(&err.diagnostics()[0]);
    let (file_b, line_b, message_b) = located(&err.diagnostics()[1]);
    assert_eq!((file_a, line_a), (&PathBuf::from("a.c"), 10));
    assert_eq!((file_b, line_b), (&PathBuf::from("b.c"), 20));
    assert_eq!(message_a, "linker could not find symbol foo");
    assert_eq!(message_b, message_a);
}

#[test]
fn test_continuation_merged_before_shape_matching() {
    let err = parse_linker_output(
        "ld.lld: error: undefined symbol: bar\n\
         >>> referenced by obj.o:(.text+0x10)\n\
         >>> main.c:42\n",
    );

    assert_eq!(err.diagnostics().len(), 1);
    let (file, line, message) = located(&err.diagnostics()[0]);
    assert_eq!(file, &PathBuf::from("main.c"));
    assert_eq!(line, 42);
    assert_eq!(message, "linker could not find symbol bar");
}

#[test]
fn test_unrecognized_lines_become_one_raw_each() {
    let err = parse_linker_output("first failure\nsecond failure\n");

    assert_eq!(err.diagnostics().len(), 2);
    assert!(err.diagnostics().iter().all(|d| !d.is_located()));
    assert_eq!(err.diagnostics()[0].to_string(), "first failure");
    assert_eq!(err.diagnostics()[1].to_string(), "second failure");
}

#[test]
fn test_unrecognized_multiline_record_preserved() {
    let text = "ld.lld: error: duplicate symbol: init\n>>> defined at a.c\n>>> defined at b.c\n";
    let err = parse_linker_output(text);

    assert_eq!(err.diagnostics().len(), 1);
    match &err.diagnostics()[0] {
        Diagnostic::Raw(raw) => {
            assert_eq!(
                raw.text(),
                "ld.lld: error: duplicate symbol: init\ndefined at a.c\ndefined at b.c"
            );
            // Reconstruction reproduces the native presentation exactly.
            assert_eq!(format!("{}\n", raw.original_text()), text);
        }
        Diagnostic::Located { .. } => panic!("expected raw diagnostic"),
    }
}

#[test]
fn test_header_without_usable_reference_falls_back_to_raw() {
    let err = parse_linker_output(
        "ld.lld: error: undefined symbol: baz\n>>> referenced by obj.o:(.text+0x10)\n",
    );

    assert_eq!(err.diagnostics().len(), 1);
    assert!(!err.diagnostics()[0].is_located());
}

#[test]
fn test_mixed_recognized_and_raw_keep_discovery_order() {
    let err = parse_linker_output(
        "ld.lld: error: cannot open crt1.o: No such file or directory\n\
         ld.lld: error: undefined symbol: foo\n\
         >>> referenced by main.o (a.c:10)\n\
         ld.lld: error: too many errors emitted\n",
    );

    assert_eq!(err.diagnostics().len(), 3);
    assert!(!err.diagnostics()[0].is_located());
    assert!(err.diagnostics()[1].is_located());
    assert!(!err.diagnostics()[2].is_located());
}

#[test]
fn test_any_failure_text_yields_nonempty_result() {
    for text in ["", "\n", "x", "garbage\n>>> more garbage\n"] {
        let err = parse_linker_output(text);
        assert!(
            !err.diagnostics().is_empty(),
            "empty result for input {:?}",
            text
        );
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let text = "ld.lld: error: undefined symbol: foo\n>>> referenced by main.o (a.c:10)\nnoise\n";
    assert_eq!(parse_linker_output(text), parse_linker_output(text));
}

proptest! {
    /// Round-trip law: re-inserting the continuation marker into a raw
    /// diagnostic and re-segmenting reproduces the original record exactly.
    #[test]
    fn prop_raw_round_trips_through_segmentation(
        lines in proptest::collection::vec("[^\n]{0,40}", 1..6)
    ) {
        prop_assume!(!lines[0].starts_with(">>> "));
        let record_text = lines.join("\n");

        let raw = ferrolink_core::RawDiagnostic::new(record_text.clone());
        let reconstructed = raw.original_text();

        let records = crate::segment::segment(&reconstructed);
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].text(), record_text.as_str());
    }
}
