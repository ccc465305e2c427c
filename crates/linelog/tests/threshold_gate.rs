//! Integration tests for threshold filtering.
//!
//! A message less critical than the threshold must not reach the sink at all,
//! and the macros must not evaluate its arguments.

use std::cell::Cell;

use linelog::{
    Logger, LoggerConfig, Severity, critical_log, debug_log, error_log, log_at, normal_log,
    verbose_log,
};
use linelog_sink::{MemoryRecords, MemorySink};

fn logger(threshold: Severity) -> (Logger<MemorySink>, MemoryRecords) {
    let sink = MemorySink::new();
    let records = sink.records();
    (Logger::new(sink, threshold).expect("logger"), records)
}

// ============================================================================
// Gate Tests
// ============================================================================

/// Verifies a verbose message under a normal threshold produces no write.
#[test]
fn verbose_under_normal_is_silent() {
    let (mut logger, records) = logger(Severity::Normal);
    verbose_log!(logger, "hidden");
    assert_eq!(records.write_count(), 0);
}

/// Verifies an error message under a normal threshold produces one write.
#[test]
fn error_under_normal_writes_once() {
    let (mut logger, records) = logger(Severity::Normal);
    error_log!(logger, "shown");
    assert_eq!(records.write_count(), 1);
}

/// Verifies every pairing of level and threshold against the numeric order.
#[test]
fn gate_matches_numeric_comparison() {
    for threshold in Severity::ALL {
        for level in Severity::ALL {
            let (mut logger, records) = logger(threshold);
            log_at!(logger, level, "x");
            let expected = usize::from(level.as_raw() <= threshold.as_raw());
            assert_eq!(
                records.write_count(),
                expected,
                "level {level} threshold {threshold}"
            );
        }
    }
}

/// Verifies critical messages pass even the strictest threshold.
#[test]
fn critical_always_passes() {
    let (mut logger, records) = logger(Severity::Critical);
    critical_log!(logger, "fatal");
    normal_log!(logger, "quiet");
    assert_eq!(records.write_count(), 1);
}

// ============================================================================
// Lazy Evaluation Tests
// ============================================================================

/// Verifies filtered macros skip their argument expressions.
#[test]
fn filtered_arguments_are_not_evaluated() {
    let (mut logger, _records) = logger(Severity::Error);
    let calls = Cell::new(0u32);
    let expensive = || {
        calls.set(calls.get() + 1);
        calls.get()
    };
    debug_log!(logger, "value ", expensive());
    verbose_log!(logger, "value ", expensive());
    assert_eq!(calls.get(), 0);
    error_log!(logger, "value ", expensive());
    assert_eq!(calls.get(), 1);
}

/// Verifies log_with skips its closure when filtered.
#[test]
fn filtered_builder_closure_is_not_run() {
    let (mut logger, records) = logger(Severity::Info);
    let ran = Cell::new(false);
    logger.log_with(Severity::Debug, |_| ran.set(true));
    assert!(!ran.get());
    assert_eq!(records.write_count(), 0);
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Verifies an in-between numeric threshold gates like the level below it.
#[test]
fn configured_numeric_threshold_rounds_down() {
    let config = LoggerConfig::from_env_value(Some("35"));
    let sink = MemorySink::new();
    let records = sink.records();
    let mut logger = Logger::from_config(sink, &config).expect("logger");
    assert_eq!(logger.threshold(), Severity::Info);
    verbose_log!(logger, "hidden");
    log_at!(logger, Severity::Info, "shown");
    assert_eq!(records.write_count(), 1);
}

/// Verifies an unparsable threshold lets everything through.
#[test]
fn unparsable_threshold_enables_debug() {
    let config = LoggerConfig::from_env_value(Some("chatty"));
    let sink = MemorySink::new();
    let records = sink.records();
    let mut logger = Logger::from_config(sink, &config).expect("logger");
    debug_log!(logger, "visible");
    assert_eq!(records.write_count(), 1);
}
