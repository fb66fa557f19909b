//! Compiled record patterns.
//!
//! Boundary patterns decide where a logical record starts and, for plain
//! records, where its fields are. The field contract is the three named
//! groups [`TIMESTAMP_GROUP`], [`LEVEL_GROUP`] and [`MESSAGE_GROUP`]; a
//! pattern without all three is rejected when it is compiled.

use crate::{config::Config, error::PatternError, types::SourceFormat};
use regex::Regex;

pub const TIMESTAMP_GROUP: &str = "timestamp";
pub const LEVEL_GROUP: &str = "level";
pub const MESSAGE_GROUP: &str = "message";

const REQUIRED_GROUPS: [&str; 3] = [TIMESTAMP_GROUP, LEVEL_GROUP, MESSAGE_GROUP];

/// Fields pulled out of a record by a boundary pattern.
///
/// A group that exists in the pattern but did not take part in the match is
/// returned as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'t> {
    pub timestamp: &'t str,
    pub level: &'t str,
    pub message: &'t str,
}

/// A compiled boundary pattern with the named-group contract checked.
#[derive(Debug, Clone)]
pub struct BoundaryPattern {
    name: &'static str,
    regex: Regex,
}

impl BoundaryPattern {
    pub fn new(name: &'static str, source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source).map_err(|source| PatternError::Invalid { name, source })?;

        for group in REQUIRED_GROUPS {
            if !regex.capture_names().flatten().any(|n| n == group) {
                return Err(PatternError::MissingGroup { name, group });
            }
        }

        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Apply the pattern and return the named groups, or `None` on no match.
    pub fn fields<'t>(&self, text: &'t str) -> Option<RecordFields<'t>> {
        let caps = self.regex.captures(text)?;
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        Some(RecordFields {
            timestamp: group(TIMESTAMP_GROUP),
            level: group(LEVEL_GROUP),
            message: group(MESSAGE_GROUP),
        })
    }
}

/// Every pattern a run needs, compiled once from [`Config`].
#[derive(Debug, Clone)]
pub struct Patterns {
    pub fea: BoundaryPattern,
    pub assimilation: BoundaryPattern,
    pub native: BoundaryPattern,
    /// Matched against whole FEA records; no group contract.
    pub central_logger: Regex,
}

impl Patterns {
    pub fn compile(config: &Config) -> Result<Self, PatternError> {
        let central_logger = Regex::new(&config.fea_central_logger_pattern).map_err(|source| {
            PatternError::Invalid {
                name: "fea_central_logger",
                source,
            }
        })?;

        Ok(Self {
            fea: BoundaryPattern::new("fea_log", &config.fea_log_pattern)?,
            assimilation: BoundaryPattern::new("assimilation", &config.assimilation_pattern)?,
            native: BoundaryPattern::new("native_log", &config.native_log_pattern)?,
            central_logger,
        })
    }

    pub fn boundary(&self, format: SourceFormat) -> &BoundaryPattern {
        match format {
            SourceFormat::Fea => &self.fea,
            SourceFormat::Assimilation => &self.assimilation,
            SourceFormat::Native => &self.native,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r"^(?<timestamp>\S+) (?<level>\S+) (?<message>.*)";

    #[test]
    fn fields_are_named_not_positional() {
        let p = BoundaryPattern::new(
            "reordered",
            r"^(?<level>[A-Z]+)@(?<timestamp>\S+): (?<message>.*)",
        )
        .unwrap();
        let fields = p.fields("WARN@2024-01-01T00:00:00Z: disk low").unwrap();
        assert_eq!(fields.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(fields.level, "WARN");
        assert_eq!(fields.message, "disk low");
    }

    #[test]
    fn non_matching_text_has_no_fields() {
        let p = BoundaryPattern::new("simple", SIMPLE).unwrap();
        assert!(p.fields("single-token").is_none());
        assert!(!p.is_match("single-token"));
    }

    #[test]
    fn optional_group_that_did_not_participate_is_empty() {
        let p = BoundaryPattern::new(
            "optional",
            r"^(?<timestamp>\S+)(?: \[(?<level>\w+)\])? (?<message>.*)",
        )
        .unwrap();
        let fields = p.fields("2024-01-01 hello").unwrap();
        assert_eq!(fields.level, "");
        assert_eq!(fields.message, "hello");
    }

    #[test]
    fn missing_group_is_rejected() {
        let err = BoundaryPattern::new("broken", r"^(?<timestamp>\S+) (?<message>.*)").unwrap_err();
        assert!(matches!(
            err,
            PatternError::MissingGroup {
                name: "broken",
                group: LEVEL_GROUP
            }
        ));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let err = BoundaryPattern::new("bad", r"(?<timestamp>[").unwrap_err();
        assert!(matches!(err, PatternError::Invalid { name: "bad", .. }));
    }

    #[test]
    fn boundary_names_follow_config_keys() {
        let patterns = Patterns::compile(&Config::defaults()).unwrap();
        let names: Vec<&str> = SourceFormat::PRIORITY
            .into_iter()
            .map(|f| patterns.boundary(f).name())
            .collect();
        assert_eq!(names, vec!["fea_log", "assimilation", "native_log"]);
    }

    #[test]
    fn bad_central_logger_pattern_is_rejected() {
        let mut cfg = Config::defaults();
        cfg.fea_central_logger_pattern = "(".to_string();
        assert!(matches!(
            Patterns::compile(&cfg),
            Err(PatternError::Invalid {
                name: "fea_central_logger",
                ..
            })
        ));
    }
}
