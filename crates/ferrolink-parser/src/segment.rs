//! Segmentation of linker output into logical error records.
//!
//! LLD prints one error per line, except that details belonging to the
//! preceding error continue on lines prefixed with the `">>> "` marker. A
//! [`Record`] is one logical error: the opening line plus any continuation
//! lines with the marker stripped, joined with `\n`.

use ferrolink_core::CONTINUATION_MARKER;

/// One logical linker error record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    text: String,
}

impl Record {
    fn new(line: &str) -> Self {
        Self {
            text: line.to_owned(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    /// Merged record text, continuation markers stripped.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Lines of the merged record.
    pub(crate) fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

/// Split linker output into records, merging continuation-marked lines into
/// the record they continue.
///
/// A single trailing newline is not treated as an empty final record. A
/// marker-prefixed line with no preceding record opens a record with the
/// marker kept, so no text is ever dropped.
pub(crate) fn segment(text: &str) -> Vec<Record> {
    let text = text.strip_suffix('\n').unwrap_or(text);

    let mut records: Vec<Record> = Vec::new();
    for line in text.split('\n') {
        match records.last_mut() {
            Some(record) if line.starts_with(CONTINUATION_MARKER) => {
                record.push_line(&line[CONTINUATION_MARKER.len()..]);
            }
            _ => records.push(Record::new(line)),
        }
    }
    records
}
