//! Error types for fealog-core.

use crate::types::SourceFormat;
use thiserror::Error;

/// A configured pattern that cannot be used.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid {name} pattern: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{name} pattern is missing the named group `{group}`")]
    MissingGroup {
        name: &'static str,
        group: &'static str,
    },
}

/// Configuration that compiles but cannot drive a run. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("level_aliases entry {index} has an empty level name")]
    EmptyLevel { index: usize },
}

/// Why a single logical record was skipped.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("no JSON payload found in central logger record")]
    MissingPayload,

    #[error("malformed central logger payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("central logger payload has an empty category")]
    EmptyCategory,

    #[error("record does not match the {0} boundary pattern")]
    PatternMismatch(SourceFormat),

    #[error("unparseable timestamp {0:?}")]
    BadTimestamp(String),
}
