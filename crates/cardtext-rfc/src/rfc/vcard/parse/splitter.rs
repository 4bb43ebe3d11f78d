//! Record splitting.
//!
//! Groups the lines of a vCard stream into one [`RawRecord`] per
//! `BEGIN:VCARD` marker. Marker lines and lines carrying nothing worth
//! rendering (`VERSION`, `PRODID`) are dropped here.

use std::borrow::Cow;
use std::io::{self, BufRead};

use cardtext_core::constants::{BEGIN_VCARD, END_VCARD, SKIPPED_MARKERS};

use super::lexer::decode_line;

/// A decoded, trimmed input line with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub number: usize,
    pub text: String,
}

/// The property lines of one contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Line number of the `BEGIN:VCARD` marker.
    pub start_line: usize,
    /// Property lines, markers excluded.
    pub lines: Vec<RecordLine>,
    /// Whether an `END:VCARD` closed the record.
    pub terminated: bool,
}

/// Lazily splits a line stream into [`RawRecord`]s.
///
/// The splitter is single-pass and stops for good after the input ends or a
/// read fails.
#[derive(Debug)]
pub struct RecordSplitter<R> {
    reader: R,
    buf: Vec<u8>,
    line_num: usize,
    current: Option<RawRecord>,
    done: bool,
}

impl<R: BufRead> RecordSplitter<R> {
    /// Creates a splitter reading from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_num: 0,
            current: None,
            done: false,
        }
    }

    /// Reads and decodes the next line. `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_num += 1;

        let line = decode_line(&self.buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!(
                line = self.line_num,
                "Invalid UTF-8 replaced while decoding line"
            );
        }
        Ok(Some(line.into_owned()))
    }

    /// Handles one decoded line, returning a record if it completed one.
    fn accept(&mut self, text: String) -> Option<RawRecord> {
        if text.contains(BEGIN_VCARD) {
            let next = RawRecord {
                start_line: self.line_num,
                ..RawRecord::default()
            };
            let previous = self.current.replace(next);
            if let Some(record) = &previous {
                tracing::debug!(
                    start_line = record.start_line,
                    line = self.line_num,
                    "Record closed by a new BEGIN:VCARD without END:VCARD"
                );
            }
            return previous;
        }

        let Some(record) = self.current.as_mut() else {
            tracing::trace!(line = self.line_num, "Ignoring line outside of a record");
            return None;
        };

        if text.contains(END_VCARD) {
            record.terminated = true;
            return self.current.take();
        }

        if text.is_empty() || SKIPPED_MARKERS.iter().any(|marker| text.contains(marker)) {
            tracing::trace!(line = self.line_num, "Skipping line");
            return None;
        }

        record.lines.push(RecordLine {
            number: self.line_num,
            text,
        });
        None
    }
}

impl<R: BufRead> Iterator for RecordSplitter<R> {
    type Item = io::Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.next_line() {
                Ok(Some(text)) => {
                    if let Some(record) = self.accept(text) {
                        return Some(Ok(record));
                    }
                }
                Ok(None) => {
                    self.done = true;
                    if let Some(record) = &self.current {
                        tracing::debug!(
                            start_line = record.start_line,
                            "Input ended inside an unterminated record"
                        );
                    }
                    return self.current.take().map(Ok);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> Vec<RawRecord> {
        RecordSplitter::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn texts(record: &RawRecord) -> Vec<&str> {
        record.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn splits_terminated_records() {
        let records = split(
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:A\r\nEND:VCARD\r\nBEGIN:VCARD\r\nFN:B\r\nEND:VCARD\r\n",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(texts(&records[0]), vec!["FN:A"]);
        assert_eq!(texts(&records[1]), vec!["FN:B"]);
        assert!(records.iter().all(|r| r.terminated));
    }

    #[test]
    fn keeps_line_numbers() {
        let records = split("junk\nBEGIN:VCARD\nPRODID:x\nFN:A\nEND:VCARD\n");
        assert_eq!(records[0].start_line, 2);
        assert_eq!(records[0].lines[0].number, 4);
    }

    #[test]
    fn unterminated_record_is_emitted_at_end() {
        let records = split("BEGIN:VCARD\nFN:A\n");
        assert_eq!(records.len(), 1);
        assert!(!records[0].terminated);
        assert_eq!(texts(&records[0]), vec!["FN:A"]);
    }

    #[test]
    fn begin_inside_record_starts_a_new_one() {
        let records = split("BEGIN:VCARD\nFN:A\nBEGIN:VCARD\nFN:B\nEND:VCARD\n");
        assert_eq!(records.len(), 2);
        assert!(!records[0].terminated);
        assert!(records[1].terminated);
    }

    #[test]
    fn skips_markers_blank_lines_and_outside_text() {
        let records =
            split("preamble\nBEGIN:VCARD\n\nVERSION:2.1\nPRODID:-//x\n  FN:A  \nEND:VCARD\ntrailer\n");
        assert_eq!(records.len(), 1);
        assert_eq!(texts(&records[0]), vec!["FN:A"]);
    }

    #[test]
    fn skip_rule_matches_anywhere_in_the_line() {
        let records = split("BEGIN:VCARD\nNOTE:new VERSION soon\nFN:A\nEND:VCARD\n");
        assert_eq!(texts(&records[0]), vec!["FN:A"]);
    }

    #[test]
    fn invalid_utf8_does_not_abort() {
        let input: &[u8] = b"BEGIN:VCARD\nFN:Jos\xe9\nEND:VCARD\n";
        let records: Vec<_> = RecordSplitter::new(input)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(texts(&records[0]), vec!["FN:Jos\u{fffd}"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split("").is_empty());
    }
}
