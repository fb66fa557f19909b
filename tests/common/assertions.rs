//! Domain-specific assertion macros for fealog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* event broke *which* expectation.

/// Assert the canonical level of a `NormalizedEvent`.
///
/// ```rust
/// assert_level!(event, Some("Warn"));
/// ```
#[macro_export]
macro_rules! assert_level {
    ($event:expr, $level:expr) => {{
        let event: &fealog_core::NormalizedEvent = &$event;
        let expected: Option<&str> = $level;
        if event.level.as_deref() != expected {
            panic!(
                "assert_level! failed:\n  expected: {:?}\n  actual:   {:?}\n  rawArgs: {:?}",
                expected, event.level, event.raw_args
            );
        }
    }};
}

/// Assert the `args` sequence of a `NormalizedEvent`.
#[macro_export]
macro_rules! assert_args {
    ($event:expr, [$($arg:expr),* $(,)?]) => {{
        let event: &fealog_core::NormalizedEvent = &$event;
        let expected: Vec<String> = vec![$($arg.to_string()),*];
        pretty_assertions::assert_eq!(
            event.args, expected,
            "assert_args! failed for event with rawArgs {:?}", event.raw_args
        );
    }};
}

/// Assert that every event carries the fields the viewer requires: a
/// non-empty `category`, a string `rawArgs` and a numeric `timestamp`.
pub fn assert_event_invariants(event: &fealog_core::NormalizedEvent) {
    assert!(
        !event.category.is_empty(),
        "event has empty category: {event:?}"
    );

    let json = serde_json::to_value(event).expect("event serializes");
    assert!(json["category"].is_string(), "{json}");
    assert!(json["rawArgs"].is_string(), "missing rawArgs: {json}");
    assert!(json["timestamp"].is_number(), "non-numeric timestamp: {json}");

    assert!(
        event.highlight_flags.is_empty(),
        "core never sets highlight flags: {event:?}"
    );
    assert_eq!(event.previous_row_time_delta, 0, "{event:?}");
    assert_eq!(event.time_elapsed_from_startup, 0, "{event:?}");
}
