//! Export — serializes a run into the viewer bundle files.
//!
//! | File | Content |
//! |------|---------|
//! | `log0.json` | `{"partial_log": [...]}` with every normalized event |
//! | `log_state.json` | the [`ViewerState`] document |
//! | `Not Central Logger.log` | FEA plain records, separated by a blank line |

use crate::{pipeline::RunOutput, types::NormalizedEvent, viewer_state::ViewerState};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EVENTS_FILE: &str = "log0.json";
pub const VIEWER_STATE_FILE: &str = "log_state.json";
pub const AUDIT_FILE: &str = "Not Central Logger.log";

const AUDIT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level shape of `log0.json`.
#[derive(Debug, Serialize)]
pub struct EventLog<'a> {
    pub partial_log: &'a [NormalizedEvent],
}

pub fn events_json(events: &[NormalizedEvent]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&EventLog {
        partial_log: events,
    })
}

pub fn viewer_state_json(state: &ViewerState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

pub fn audit_log(records: &[String]) -> String {
    records.join(AUDIT_SEPARATOR)
}

/// Paths of the files written by [`write_bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub events: PathBuf,
    pub viewer_state: PathBuf,
    pub audit: PathBuf,
}

/// Write all three bundle files into `dir`, which must already exist.
pub fn write_bundle(
    dir: &Path,
    output: &RunOutput,
    state: &ViewerState,
) -> Result<BundlePaths, ExportError> {
    let events = events_json(&output.events).map_err(|source| ExportError::Serialize {
        file: EVENTS_FILE,
        source,
    })?;
    let viewer_state = viewer_state_json(state).map_err(|source| ExportError::Serialize {
        file: VIEWER_STATE_FILE,
        source,
    })?;

    let paths = BundlePaths {
        events: dir.join(EVENTS_FILE),
        viewer_state: dir.join(VIEWER_STATE_FILE),
        audit: dir.join(AUDIT_FILE),
    };

    write(&paths.audit, &audit_log(&output.fea_plain_records))?;
    tracing::info!(path = %paths.audit.display(), "other FEA records saved");
    write(&paths.events, &events)?;
    tracing::info!(path = %paths.events.display(), events = output.events.len(), "event log written");
    write(&paths.viewer_state, &viewer_state)?;
    tracing::info!(path = %paths.viewer_state.display(), "viewer state written");

    Ok(paths)
}

fn write(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer_state::ViewerStateBuilder;

    fn event(raw: &str) -> NormalizedEvent {
        NormalizedEvent::new(
            "system",
            "Native",
            Some("Info".to_string()),
            serde_json::Number::from(1),
            vec![raw.to_string()],
            raw,
        )
    }

    #[test]
    fn events_are_wrapped_in_partial_log() {
        let json = events_json(&[event("a"), event("b")]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let list = v["partial_log"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["rawArgs"], "b");
    }

    #[test]
    fn empty_run_still_has_partial_log() {
        let v: serde_json::Value = serde_json::from_str(&events_json(&[]).unwrap()).unwrap();
        assert_eq!(v, serde_json::json!({ "partial_log": [] }));
    }

    #[test]
    fn audit_records_are_blank_line_separated() {
        let records = vec!["first\n  detail".to_string(), "second".to_string()];
        assert_eq!(audit_log(&records), "first\n  detail\n\nsecond");
        assert_eq!(audit_log(&[]), "");
    }

    #[test]
    fn bundle_lands_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = RunOutput {
            events: vec![event("x")],
            fea_plain_records: vec!["[t] [INFO] x".to_string()],
            ..RunOutput::default()
        };
        let state = ViewerStateBuilder::new(output.client_names()).build();

        let paths = write_bundle(dir.path(), &output, &state).unwrap();
        assert_eq!(paths.events, dir.path().join("log0.json"));
        assert_eq!(
            std::fs::read_to_string(&paths.audit).unwrap(),
            "[t] [INFO] x"
        );
        let state_json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths.viewer_state).unwrap()).unwrap();
        assert_eq!(state_json["registeredClientNames"], serde_json::json!(["Native"]));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let state = ViewerStateBuilder::new(vec![]).build();
        let err = write_bundle(&missing, &RunOutput::default(), &state).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
