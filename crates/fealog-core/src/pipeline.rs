//! Run driver.
//!
//! [`Pipeline`] owns the compiled patterns, the alias table and the
//! append-only output of a run. Files are ingested one at a time, in the
//! order the caller supplies them; events keep file order, then record
//! order within each file.

use crate::{
    central::CentralLoggerNormalizer,
    classify::RecordClassifier,
    config::Config,
    detect::FormatDetector,
    error::ConfigError,
    levels::LevelAliasResolver,
    pattern::Patterns,
    plain::PlainRecordNormalizer,
    split::RecordSplitter,
    types::{NormalizedEvent, SourceFile, SourceFormat},
};
use thiserror::Error;

/// Progress is reported after every this many central-logger records.
pub const PROGRESS_INTERVAL: usize = 500;

/// Why a whole file contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("cannot determine log record type from first line {first_line:?}")]
    UndetectableFormat { first_line: Option<String> },

    #[error("failed to read file: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSkip {
    pub file: String,
    pub reason: SkipReason,
}

/// Counters and skips collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files_loaded: usize,
    pub skipped_files: Vec<FileSkip>,
    pub central_records: usize,
    pub plain_records: usize,
    pub parsed_central_records: usize,
    pub skipped_records: usize,
}

impl RunReport {
    pub fn total_records(&self) -> usize {
        self.central_records + self.plain_records
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutput {
    pub events: Vec<NormalizedEvent>,
    /// FEA records that were not central-logger records, verbatim.
    pub fea_plain_records: Vec<String>,
    pub report: RunReport,
}

impl RunOutput {
    /// Distinct non-blank client names in order of first appearance.
    pub fn client_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.events
            .iter()
            .map(|e| e.client_name.as_str())
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(*name))
            .map(str::to_owned)
            .collect()
    }
}

pub struct Pipeline {
    patterns: Patterns,
    levels: LevelAliasResolver,
    output: RunOutput,
}

impl Pipeline {
    /// Compile patterns and build the alias table. Fails on invalid config.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let patterns = Patterns::compile(config)?;
        let levels = LevelAliasResolver::from_config(&config.level_aliases)?;
        tracing::debug!(aliases = levels.len(), "pipeline ready");

        Ok(Self {
            patterns,
            levels,
            output: RunOutput::default(),
        })
    }

    /// Detect, split, classify and normalize one file.
    pub fn ingest(&mut self, file: &SourceFile) {
        let Some(detection) = FormatDetector::new(&self.patterns).detect(file.first_line()) else {
            tracing::warn!(
                file = %file.name,
                first_line = ?file.first_line(),
                "cannot determine log record type by first line; file ignored"
            );
            self.output.report.skipped_files.push(FileSkip {
                file: file.name.clone(),
                reason: SkipReason::UndetectableFormat {
                    first_line: file.first_line().map(str::to_owned),
                },
            });
            return;
        };

        let records = RecordSplitter::new(detection.pattern).split(&file.lines);
        tracing::debug!(
            file = %file.name,
            format = %detection.format,
            pattern = detection.pattern.name(),
            records = records.len(),
            "split file"
        );

        let classifier = RecordClassifier::new(&self.patterns.central_logger);
        let central = CentralLoggerNormalizer::new(&self.levels);
        let plain = PlainRecordNormalizer::new(&self.levels);
        let out = &mut self.output;

        for text in records {
            let record = classifier.classify(text, detection.format, detection.client_name());

            let result = if record.is_central_logger {
                out.report.central_records += 1;
                central.normalize(&record.text)
            } else {
                out.report.plain_records += 1;
                if record.source_format == SourceFormat::Fea {
                    out.fea_plain_records.push(record.text.clone());
                }
                plain.normalize(&record, detection.pattern)
            };

            match result {
                Ok(event) => {
                    out.events.push(event);
                    if record.is_central_logger {
                        out.report.parsed_central_records += 1;
                        if out.report.parsed_central_records % PROGRESS_INTERVAL == 0 {
                            tracing::info!(
                                parsed = out.report.parsed_central_records,
                                "parsed central logger records"
                            );
                        }
                    }
                }
                Err(error) => {
                    out.report.skipped_records += 1;
                    tracing::warn!(
                        file = %file.name,
                        pattern = detection.pattern.name(),
                        %error,
                        record = %record.text,
                        "skipping record"
                    );
                }
            }
        }

        out.report.files_loaded += 1;
        tracing::info!(
            file = %file.name,
            total_records = out.report.total_records(),
            "loaded file"
        );
    }

    /// Record a file the caller could not read.
    pub fn skip_unreadable(&mut self, file: &str, error: &dyn std::error::Error) {
        tracing::warn!(file, %error, "failed to read file; skipped");
        self.output.report.skipped_files.push(FileSkip {
            file: file.to_owned(),
            reason: SkipReason::Unreadable(error.to_string()),
        });
    }

    pub fn output(&self) -> &RunOutput {
        &self.output
    }

    pub fn finish(self) -> RunOutput {
        let report = &self.output.report;
        tracing::info!(
            files = report.files_loaded,
            skipped_files = report.skipped_files.len(),
            central = report.central_records,
            parsed_central = report.parsed_central_records,
            plain = report.plain_records,
            skipped_records = report.skipped_records,
            events = self.output.events.len(),
            "run complete"
        );
        self.output
    }
}
