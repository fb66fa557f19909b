//! Configuration types for fealog.
//!
//! [`Config::load`] layers an optional user file and an optional explicit
//! file on top of the embedded defaults. [`Config::defaults`] returns the
//! same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
# [2024-01-15T10:00:00.123Z] [INFO] message
fea_log_pattern = '^\[(?<timestamp>\d{4}-\d{2}-\d{2}[T ][0-9:.,]+(?:Z|[+-]\d{2}:?\d{2})?)\]\s+\[(?<level>[A-Za-z]+)\]\s+(?<message>(?s:.*))'

# [2024-01-15T10:00:00.123Z] [INFO] [CentralLogger] {"category": ...}
fea_central_logger_pattern = '^\[[^\]]+\]\s+\[[A-Za-z]+\]\s+\[CentralLogger\]'

# 2024-01-15 10:00:00.123 | WARN | message
assimilation_pattern = '^(?<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?:[.,]\d+)?)\s*\|\s*(?<level>[A-Za-z]+)\s*\|\s*(?<message>(?s:.*))'

# 2024-01-15T10:00:00Z WARN message
native_log_pattern = '^(?<timestamp>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)\s+(?<level>[A-Za-z]+)\s+(?<message>(?s:.*))'

[[level_aliases]]
level   = "Error"
aliases = ["error", "err", "e", "fatal", "critical", "crit"]

[[level_aliases]]
level   = "Warn"
aliases = ["warn", "warning", "w"]

[[level_aliases]]
level   = "Info"
aliases = ["info", "information", "inf", "i"]

[[level_aliases]]
level   = "Log"
aliases = ["log", "notice"]

[[level_aliases]]
level   = "Debug"
aliases = ["debug", "dbg", "d"]

[[level_aliases]]
level   = "Verbose"
aliases = ["verbose", "verb", "v", "trace"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Boundary pattern for FEA client logs. Needs `timestamp`, `level` and
    /// `message` named groups, like the other two boundary patterns.
    pub fea_log_pattern: String,
    /// Matched against whole FEA records to spot central-logger records.
    pub fea_central_logger_pattern: String,
    pub assimilation_pattern: String,
    pub native_log_pattern: String,
    /// Canonical level → aliases. Order matters: when an alias is listed
    /// under two levels, the earlier entry keeps it.
    #[serde(default)]
    pub level_aliases: Vec<LevelAliasEntry>,
}

/// One `[[level_aliases]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelAliasEntry {
    pub level: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `$XDG_CONFIG_HOME/fealog/config.toml`
    /// if present, then `explicit` (which must exist when given).
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(user_config_path().as_path()).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml_with_defaults(text: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn user_config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fealog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
