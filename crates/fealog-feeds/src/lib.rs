//! fealog-feeds — log file sources for fealog.
//!
//! Finds the candidate files in a folder and reads each one into a
//! [`fealog_core::SourceFile`] for the pipeline.

pub mod file;

pub use file::{discover, read_source, Discovery, FeedError};
