//! Static log corpora used across harnesses.
//!
//! Each corpus is the full text of one input file in one client layout.

/// FEA client log: plain lines, a multi-line stack trace, central-logger
/// records in every `logData` shape, and one broken payload.
pub const CORPUS_FEA: &str = r#"[2024-01-15T10:00:00.000Z] [INFO] Shell starting
[2024-01-15T10:00:00.100Z] [INFO] [CentralLogger] {"category":"system","logClientName":"Shell","logType":"Info","logTimestamp":1705312800100,"logData":"[\"boot\",\"v2.4.1\"]"}
[2024-01-15T10:00:00.200Z] [WARN] [CentralLogger] {"category":"dev","logClientName":"Grid","logType":"warning","logTimestamp":1705312800200,"logData":"[slow render, 340ms]"}
[2024-01-15T10:00:00.300Z] [ERROR] Unhandled rejection
    at Grid.render (grid.js:120)
    at Shell.tick (shell.js:42)
[2024-01-15T10:00:00.400Z] [INFO] [CentralLogger] {"category":"perf",
  "logClientName":"Grid",
  "logType":"Verbose",
  "logTimestamp":1705312800400,
  "logData":{"fps":58,"frames":[1,2]}}
[2024-01-15T10:00:00.500Z] [INFO] [CentralLogger] {"category":"system","logClientName":"Shell" BROKEN
[2024-01-15T10:00:00.600Z] [debug] Shell idle"#;

/// Assimilation client log.
pub const CORPUS_ASSIMILATION: &str = "\
2024-01-15 10:00:01.000 | Information | sync started
2024-01-15 10:00:02,500 | Warning | 3 items skipped
  item 17: checksum mismatch
2024-01-15 10:00:03.000 | Chatty | unknown level survives
";

/// Native client log, including one record with an impossible timestamp.
pub const CORPUS_NATIVE: &str = "\
2024-01-15T10:00:04Z INFO native host up
2024-01-15T10:00:05+01:00 ERROR crash reporter armed
2024-99-99T10:00:06Z INFO impossible date
2024-01-15T10:00:07.250Z DEBUG heartbeat
";

/// A file no boundary pattern recognises.
pub const CORPUS_UNKNOWN: &str = "\
=== session dump ===
2024-01-15T10:00:04Z INFO would match native, but not on line one
";

/// Epoch millis for 2024-01-15T10:00:00Z.
pub const T0: i64 = 1_705_312_800_000;
