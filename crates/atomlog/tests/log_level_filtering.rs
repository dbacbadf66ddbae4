//! Integration tests for threshold filtering.
//!
//! These tests verify that a record is emitted exactly when its level is at
//! or above the logger's threshold, and that changing the threshold affects
//! only later calls.

use atomlog::{LogLevel, Logger, SourceLocation, Streams, ThresholdConfig};

/// Logs one message at `level` and returns (stdout, stderr).
fn emit(logger: &Logger, level: LogLevel, message: &str) -> (String, String) {
    let mut streams = Streams::new(Vec::new(), Vec::new());
    logger
        .log_to(
            level,
            message,
            SourceLocation::new(Some("f.ext"), 42),
            &mut streams,
        )
        .expect("in-memory write succeeds");
    let (stdout, stderr) = streams.into_inner();
    (
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

fn line_count(output: &(String, String)) -> usize {
    output.0.lines().count() + output.1.lines().count()
}

// ============================================================================
// Threshold Monotonicity
// ============================================================================

/// Verifies every (threshold, level) pair emits iff level >= threshold.
#[test]
fn filtering_is_exact_for_every_pair() {
    for threshold in LogLevel::ALL {
        let logger = Logger::new();
        logger.set_level(threshold);

        for level in LogLevel::ALL {
            let output = emit(&logger, level, "sample");
            let expected = usize::from(level >= threshold);
            assert_eq!(
                line_count(&output),
                expected,
                "threshold {threshold}, level {level}"
            );
        }
    }
}

/// Verifies an emitted record appears exactly once with its label and text.
#[test]
fn emitted_record_has_label_and_message() {
    let logger = Logger::new();
    logger.set_level(LogLevel::Debug);

    for level in LogLevel::ALL {
        let (stdout, stderr) = emit(&logger, level, "verbatim text");
        let combined = format!("{stdout}{stderr}");
        assert_eq!(combined.matches("verbatim text").count(), 1);
        assert!(combined.contains(&format!("[{}] verbatim text", level.name())));
    }
}

// ============================================================================
// Threshold Changes
// ============================================================================

/// Verifies the default threshold hides debug and shows the rest.
#[test]
fn default_threshold_scenario() {
    let logger = Logger::new();

    let (stdout, stderr) = emit(&logger, LogLevel::Debug, "x");
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());

    let (stdout, stderr) = emit(&logger, LogLevel::Info, "y");
    assert!(stdout.ends_with(" [INFO] y\n"));
    assert!(stderr.is_empty());

    let (stdout, stderr) = emit(&logger, LogLevel::Warn, "z");
    assert!(stdout.is_empty());
    assert!(stderr.contains(" [WARN] z [at f.ext:42]"));

    let (stdout, stderr) = emit(&logger, LogLevel::Error, "w");
    assert!(stdout.is_empty());
    assert!(stderr.contains(" [ERROR] w [at f.ext:42]"));
}

/// Verifies raising the threshold to ERROR silences warnings only.
#[test]
fn error_threshold_silences_warnings() {
    let logger = Logger::new();
    logger.set_level(LogLevel::Error);

    assert_eq!(line_count(&emit(&logger, LogLevel::Warn, "ignored")), 0);
    assert_eq!(line_count(&emit(&logger, LogLevel::Error, "kept")), 1);
}

/// Verifies setting the same threshold twice behaves like setting it once.
#[test]
fn set_level_is_idempotent() {
    let once = Logger::new();
    once.set_level(LogLevel::Warn);

    let twice = Logger::new();
    twice.set_level(LogLevel::Warn);
    twice.set_level(LogLevel::Warn);

    assert_eq!(once.level(), twice.level());
    for level in LogLevel::ALL {
        assert_eq!(once.enabled(level), twice.enabled(level));
        assert_eq!(
            line_count(&emit(&once, level, "m")),
            line_count(&emit(&twice, level, "m"))
        );
    }
}

/// Verifies lowering the threshold re-enables previously hidden levels.
#[test]
fn lowering_threshold_reenables_levels() {
    let logger = Logger::new();
    logger.set_level(LogLevel::Error);
    assert_eq!(line_count(&emit(&logger, LogLevel::Debug, "hidden")), 0);

    logger.set_level(LogLevel::Debug);
    assert_eq!(line_count(&emit(&logger, LogLevel::Debug, "shown")), 1);
}

// ============================================================================
// Configuration
// ============================================================================

/// Verifies a parsed threshold applies like a direct set_level.
#[test]
fn parsed_threshold_applies() {
    let logger = Logger::new();
    let level: LogLevel = "warning".parse().expect("valid level");
    ThresholdConfig::new(level).apply(&logger);

    assert_eq!(line_count(&emit(&logger, LogLevel::Info, "hidden")), 0);
    assert_eq!(line_count(&emit(&logger, LogLevel::Warn, "shown")), 1);
}

/// Verifies -q counters raise the threshold on a live logger.
#[test]
fn quiet_counter_applies() {
    let logger = Logger::new();
    ThresholdConfig::from_verbosity(0, 2).apply(&logger);
    assert_eq!(logger.level(), LogLevel::Error);
}
