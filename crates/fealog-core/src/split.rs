//! Reassembly of physical lines into logical records.
//!
//! A line matching the boundary pattern always opens a new record; any other
//! line is a continuation of the record before it. Stack traces and
//! pretty-printed payloads therefore stay attached to the line that started
//! them.

use crate::pattern::BoundaryPattern;

pub struct RecordSplitter<'p> {
    boundary: &'p BoundaryPattern,
}

impl<'p> RecordSplitter<'p> {
    pub fn new(boundary: &'p BoundaryPattern) -> Self {
        Self { boundary }
    }

    /// Split `lines` into trimmed logical records, in input order.
    ///
    /// Blank accumulators are dropped, so leading blank lines never produce
    /// an empty record.
    pub fn split<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut current = String::new();

        for line in lines {
            let line = line.as_ref();
            if self.boundary.is_match(line) {
                let finished = std::mem::replace(&mut current, line.to_owned());
                push_record(&mut records, &finished);
            } else {
                current.push('\n');
                current.push_str(line);
            }
        }

        push_record(&mut records, &current);
        records
    }
}

fn push_record(records: &mut Vec<String>, accumulated: &str) {
    let record = accumulated.trim();
    if !record.is_empty() {
        records.push(record.to_owned());
    }
}
