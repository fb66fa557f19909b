//! Test builders — ergonomic constructors for records and source files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fealog_core::{config::Config, Pipeline, RunOutput, SourceFile};

// ---------------------------------------------------------------------------
// CentralRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one FEA central-logger line.
///
/// ```rust
/// let line = CentralRecordBuilder::new()
///     .client("Grid")
///     .log_type("Error")
///     .log_data_json(r#""[\"a\"]""#)
///     .build();
/// ```
pub struct CentralRecordBuilder {
    category: String,
    client: String,
    log_type: String,
    timestamp: String,
    log_data: String,
}

impl Default for CentralRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CentralRecordBuilder {
    pub fn new() -> Self {
        Self {
            category: "system".to_string(),
            client: "X".to_string(),
            log_type: "Info".to_string(),
            timestamp: "1000".to_string(),
            log_data: r#""[]""#.to_string(),
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn client(mut self, client: &str) -> Self {
        self.client = client.to_string();
        self
    }

    pub fn log_type(mut self, log_type: &str) -> Self {
        self.log_type = log_type.to_string();
        self
    }

    /// Raw JSON for `logTimestamp`.
    pub fn timestamp_json(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// Raw JSON for `logData`, inserted verbatim.
    pub fn log_data_json(mut self, log_data: &str) -> Self {
        self.log_data = log_data.to_string();
        self
    }

    /// `logData` as a JSON string wrapping a JSON array of `args`.
    pub fn args(self, args: &[&str]) -> Self {
        let inner = serde_json::to_string(args).unwrap();
        let outer = serde_json::to_string(&inner).unwrap();
        self.log_data_json(&outer)
    }

    pub fn build(self) -> String {
        format!(
            r#"[2024-01-15T10:00:00Z] [INFO] [CentralLogger] {{"category":{},"logClientName":{},"logType":{},"logTimestamp":{},"logData":{}}}"#,
            serde_json::to_string(&self.category).unwrap(),
            serde_json::to_string(&self.client).unwrap(),
            serde_json::to_string(&self.log_type).unwrap(),
            self.timestamp,
            self.log_data,
        )
    }
}

// ---------------------------------------------------------------------------
// Run helpers
// ---------------------------------------------------------------------------

pub fn source(name: &str, text: &str) -> SourceFile {
    SourceFile::from_text(name, text)
}

/// Run the default-config pipeline over `(name, text)` files in order.
pub fn run(files: &[(&str, &str)]) -> RunOutput {
    run_with(&Config::defaults(), files)
}

pub fn run_with(config: &Config, files: &[(&str, &str)]) -> RunOutput {
    let mut pipeline = Pipeline::new(config).unwrap();
    for (name, text) in files {
        pipeline.ingest(&source(name, text));
    }
    pipeline.finish()
}
