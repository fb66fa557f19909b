//! Central-logger vs plain classification of logical records.

use crate::types::{ClassifiedRecord, SourceFormat};
use regex::Regex;

/// Only the FEA client writes central-logger records, so records from any
/// other format are plain no matter what they contain.
pub struct RecordClassifier<'p> {
    central_logger: &'p Regex,
}

impl<'p> RecordClassifier<'p> {
    pub fn new(central_logger: &'p Regex) -> Self {
        Self { central_logger }
    }

    pub fn is_central_logger(&self, text: &str, format: SourceFormat) -> bool {
        format == SourceFormat::Fea && self.central_logger.is_match(text)
    }

    pub fn classify(
        &self,
        text: String,
        format: SourceFormat,
        client_name: &str,
    ) -> ClassifiedRecord {
        ClassifiedRecord {
            is_central_logger: self.is_central_logger(&text, format),
            text,
            source_format: format,
            client_name: client_name.to_owned(),
        }
    }
}
