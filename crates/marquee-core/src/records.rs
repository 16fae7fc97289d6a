//! Splitting a published form export into submissions.
//!
//! The export delimits responses with a blank line. The first line of each
//! record is the comma-separated row: timestamp, text, color. The first
//! record is the header and is always dropped. Columns are positional; the
//! header is never consulted.

use crate::models::Submission;

const RECORD_SEPARATOR: &str = "\n\n";

/// A record that could not be turned into a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based position among the data records (header excluded).
    pub index: usize,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSnapshot {
    pub submissions: Vec<Submission>,
    pub malformed: Vec<MalformedRecord>,
    /// Lines after the header line inside the header record. Non-zero means
    /// the export did not separate its rows with blank lines, so those rows
    /// were dropped along with the header.
    pub header_overflow: usize,
}

/// Parse a snapshot into submissions, in export order.
///
/// Records with fewer than three fields are collected in `malformed` rather
/// than failing the parse. Whitespace-only records (trailing separators) are
/// ignored.
pub fn parse(snapshot: &str) -> ParsedSnapshot {
    let normalized = snapshot.replace("\r\n", "\n");
    let mut parsed = ParsedSnapshot::default();

    let mut records = normalized.split(RECORD_SEPARATOR).enumerate();
    if let Some((_, header)) = records.next() {
        parsed.header_overflow = header.lines().skip(1).filter(|l| !l.trim().is_empty()).count();
    }

    for (index, record) in records {
        if record.trim().is_empty() {
            continue;
        }

        let line = record.lines().next().unwrap_or_default();
        let fields: Vec<&str> = line.split(',').collect();
        match fields.as_slice() {
            [_timestamp, text, color, ..] => {
                parsed.submissions.push(Submission::new(*text, *color));
            }
            _ => parsed.malformed.push(MalformedRecord {
                index,
                line: line.to_string(),
            }),
        }
    }

    parsed
}
