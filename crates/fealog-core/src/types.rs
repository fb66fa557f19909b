//! Core types for fealog-core.
//!
//! This module defines the data shared across pipeline stages: the input
//! [`SourceFile`], the intermediate [`ClassifiedRecord`], and the single
//! output type [`NormalizedEvent`].

use serde::{Deserialize, Serialize};

/// Category assigned to every event built from a plain record.
pub const SYSTEM_CATEGORY: &str = "system";

/// One input file, already read into physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name used in logs and reports (usually the file path).
    pub name: String,
    pub lines: Vec<String>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Build a source from a block of text, splitting on `\n` / `\r\n`.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines().map(str::to_owned).collect())
    }

    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

/// Which log client layout a file was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Fea,
    Assimilation,
    Native,
}

impl SourceFormat {
    /// Detection priority: the first format whose pattern matches wins.
    pub const PRIORITY: [SourceFormat; 3] = [
        SourceFormat::Fea,
        SourceFormat::Assimilation,
        SourceFormat::Native,
    ];

    /// Client name attached to every record of a file in this format.
    pub fn default_client_name(self) -> &'static str {
        match self {
            SourceFormat::Fea => "FEA",
            SourceFormat::Assimilation => "Assimilation",
            SourceFormat::Native => "Native",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_client_name())
    }
}

/// A reassembled logical record, tagged by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    /// Trimmed record text; continuation lines are joined with `\n`.
    pub text: String,
    pub is_central_logger: bool,
    pub source_format: SourceFormat,
    pub client_name: String,
}

/// The canonical event emitted for every successfully parsed record.
///
/// Field names serialize in camelCase, matching what the viewer reads from
/// `log0.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    pub category: String,
    pub client_name: String,
    /// Canonical level name; `None` (serialized as `null`) when the raw token
    /// has no alias.
    pub level: Option<String>,
    /// Epoch milliseconds. Central-logger values are kept exactly as written
    /// in the payload, so this stays a JSON number rather than an `i64`.
    pub timestamp: serde_json::Number,
    pub highlight_flags: Vec<String>,
    pub args: Vec<String>,
    pub raw_args: String,
    pub previous_row_time_delta: i64,
    pub time_elapsed_from_startup: i64,
}

impl NormalizedEvent {
    /// Build an event with the downstream-only fields zeroed.
    pub fn new(
        category: impl Into<String>,
        client_name: impl Into<String>,
        level: Option<String>,
        timestamp: serde_json::Number,
        args: Vec<String>,
        raw_args: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            client_name: client_name.into(),
            level,
            timestamp,
            highlight_flags: Vec::new(),
            args,
            raw_args: raw_args.into(),
            previous_row_time_delta: 0,
            time_elapsed_from_startup: 0,
        }
    }
}
