//! Per-file format detection.
//!
//! Only the first line of a file is inspected. The three boundary patterns
//! are tried in [`SourceFormat::PRIORITY`] order and the first match decides
//! the format for the whole file.

use crate::{
    pattern::{BoundaryPattern, Patterns},
    types::SourceFormat,
};

/// The outcome of a successful detection.
#[derive(Debug, Clone, Copy)]
pub struct Detection<'p> {
    pub format: SourceFormat,
    /// Boundary pattern used to split, and later parse, this file's records.
    pub pattern: &'p BoundaryPattern,
}

impl Detection<'_> {
    pub fn client_name(&self) -> &'static str {
        self.format.default_client_name()
    }
}

pub struct FormatDetector<'p> {
    patterns: &'p Patterns,
}

impl<'p> FormatDetector<'p> {
    pub fn new(patterns: &'p Patterns) -> Self {
        Self { patterns }
    }

    /// Returns `None` for an empty file or an unrecognised first line.
    pub fn detect(&self, first_line: Option<&str>) -> Option<Detection<'p>> {
        let line = first_line?;

        SourceFormat::PRIORITY.into_iter().find_map(|format| {
            let pattern = self.patterns.boundary(format);
            pattern
                .is_match(line)
                .then_some(Detection { format, pattern })
        })
    }
}
