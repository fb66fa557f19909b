//! fealog-core — record reconstruction and normalization for fealog.
//!
//! This crate turns the raw lines of FEA, Assimilation and Native client logs
//! into one ordered sequence of [`NormalizedEvent`] values, plus the viewer
//! state a central-logger viewer needs to present them.
//!
//! # Architecture
//!
//! ```text
//! FormatDetector ──► RecordSplitter ──► RecordClassifier ─┬─► CentralLoggerNormalizer ─┐
//!                                                         └─► PlainRecordNormalizer ───┴─► events
//!                                                                                            │
//!                                                       ViewerStateBuilder ◄── client names ─┤
//!                                                                        export ◄────────────┘
//! ```
//!
//! Everything runs synchronously, one file at a time. [`pipeline::Pipeline`]
//! drives the stages and owns the append-only output.

pub mod central;
pub mod classify;
pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod levels;
pub mod pattern;
pub mod pipeline;
pub mod plain;
pub mod split;
pub mod time;
pub mod types;
pub mod viewer_state;

pub use error::{ConfigError, PatternError, RecordError};
pub use pipeline::{Pipeline, RunOutput, RunReport};
pub use types::{ClassifiedRecord, NormalizedEvent, SourceFile, SourceFormat};
