//! Central-logger record normalization.
//!
//! A central-logger record is an FEA line whose tail is a JSON object:
//!
//! ```text
//! [2024-01-15T10:00:00Z] [INFO] [CentralLogger] {"category":"dev","logClientName":"Shell",
//!   "logType":"Info","logTimestamp":1705312800000,"logData":"[\"a\",\"b\"]"}
//! ```
//!
//! The payload is everything from the first `{` to the last `}`, so nested
//! objects and embedded newlines survive. `logData` is kept verbatim as
//! `rawArgs` and resolved into `args` through [`ArgsResolution`].

use crate::{
    error::RecordError,
    levels::LevelAliasResolver,
    types::NormalizedEvent,
};
use serde::Deserialize;
use serde_json::value::RawValue;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CentralLoggerPayload {
    category: String,
    log_client_name: String,
    log_type: String,
    log_timestamp: serde_json::Number,
    log_data: Box<RawValue>,
}

/// How `args` was derived from the raw `logData` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsResolution {
    /// `logData` was a JSON string holding a JSON array of strings.
    ParsedArray(Vec<String>),
    /// `logData` was a JSON string, but not an array: one pair of brackets
    /// stripped, split on `,`.
    SplitFallback(Vec<String>),
    /// Anything else; `args` is just the raw text.
    RawString,
}

impl ArgsResolution {
    pub fn resolve(raw_args: &str) -> Self {
        let unquoted = match serde_json::from_str::<Option<String>>(raw_args) {
            Ok(Some(s)) if !s.is_empty() => s,
            _ => return ArgsResolution::RawString,
        };

        match serde_json::from_str::<Vec<String>>(&unquoted) {
            Ok(args) => ArgsResolution::ParsedArray(args),
            Err(_) => ArgsResolution::SplitFallback(split_delimited(&unquoted)),
        }
    }

    pub fn into_args(self, raw_args: &str) -> Vec<String> {
        match self {
            ArgsResolution::ParsedArray(args) | ArgsResolution::SplitFallback(args) => args,
            ArgsResolution::RawString => vec![raw_args.to_owned()],
        }
    }
}

fn split_delimited(text: &str) -> Vec<String> {
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);
    text.split(',').map(str::to_owned).collect()
}

/// Greedy brace-to-brace slice, or `None` when there is no `{ … }` pair.
pub fn extract_payload(record: &str) -> Option<&str> {
    let start = record.find('{')?;
    let end = record.rfind('}')?;
    (end > start).then(|| &record[start..=end])
}

pub struct CentralLoggerNormalizer<'a> {
    levels: &'a LevelAliasResolver,
}

impl<'a> CentralLoggerNormalizer<'a> {
    pub fn new(levels: &'a LevelAliasResolver) -> Self {
        Self { levels }
    }

    pub fn normalize(&self, record: &str) -> Result<NormalizedEvent, RecordError> {
        let json = extract_payload(record).ok_or(RecordError::MissingPayload)?;
        let payload: CentralLoggerPayload = serde_json::from_str(json)?;

        if payload.category.is_empty() {
            return Err(RecordError::EmptyCategory);
        }

        let level = self.levels.resolve(&payload.log_type).map(str::to_owned);
        if level.is_none() {
            tracing::debug!(log_type = %payload.log_type, "unresolved central logger level");
        }

        let raw_args = payload.log_data.get();
        let args = ArgsResolution::resolve(raw_args).into_args(raw_args);

        Ok(NormalizedEvent::new(
            payload.category,
            payload.log_client_name,
            level,
            payload.log_timestamp,
            args,
            raw_args,
        ))
    }
}
