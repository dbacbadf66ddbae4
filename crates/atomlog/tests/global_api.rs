//! Integration tests for the free functions over the process-wide logger.
//!
//! The free functions always write to the real standard streams, so the
//! output test re-runs this test binary as a child process and inspects what
//! the child wrote. The child is selected by an environment variable and runs
//! only the emitting test.

use std::env;

use assert_cmd::Command;
use atomlog::{CRITICAL_MARKER, LogLevel, Logger};

const CHILD_ENV: &str = "ATOMLOG_FREE_FUNCTION_CHILD";
const EMIT_TEST: &str = "free_functions_write_expected_lines";
const RESET: &str = "\x1b[0m";

/// Call sites of the location-carrying calls made by [`emit_all`].
struct CallSites {
    warn: u32,
    error: u32,
    critical: u32,
}

/// Drives every free function against the global logger.
fn emit_all() -> CallSites {
    atomlog::debug("hidden debug");
    atomlog::info("y");
    let warn = line!() + 1;
    atomlog::warn("z");
    let error = line!() + 1;
    atomlog::error("w");
    atomlog::custom(LogLevel::Warn, "Custom warning: Network latency high");
    let critical = line!() + 1;
    atomlog::critical("System overheating!");
    atomlog::conditional(false, LogLevel::Error, "skipped condition");
    atomlog::conditional(true, LogLevel::Error, "Exceeded max retry attempts: 3");
    atomlog::log(LogLevel::Error, "explicit", Some("f.ext"), 42);

    atomlog::set_level(LogLevel::Error);
    atomlog::warn("after threshold warn");
    atomlog::critical("after threshold critical");

    CallSites {
        warn,
        error,
        critical,
    }
}

// ============================================================================
// Emitted Output
// ============================================================================

/// Verifies each free function's line, stream, color and call site.
#[test]
fn free_functions_write_expected_lines() {
    if env::var_os(CHILD_ENV).is_some() {
        let sites = emit_all();
        println!("sites {} {} {}", sites.warn, sites.error, sites.critical);
        return;
    }

    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .env(CHILD_ENV, "1")
        .args(["--exact", EMIT_TEST, "--nocapture", "--test-threads=1"])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");

    let sites: Vec<u32> = stdout
        .lines()
        .find_map(|line| line.strip_prefix("sites "))
        .expect("child reports call sites")
        .split(' ')
        .map(|number| number.parse().expect("line number"))
        .collect();
    let (warn, error, critical) = (sites[0], sites[1], sites[2]);
    let file = file!();

    let info: Vec<&str> = stdout.lines().filter(|line| line.contains(" [")).collect();
    assert_eq!(info.len(), 1, "{stdout}");
    assert!(info[0].ends_with(" [INFO] y"));
    assert!(!stdout.contains("hidden debug"));

    let lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("\x1b["))
        .collect();
    assert_eq!(lines.len(), 6, "{stderr}");

    let expected = format!(" [WARN] z [at {file}:{warn}]{RESET}");
    assert!(lines[0].starts_with("\x1b[33m"));
    assert!(lines[0].ends_with(&expected), "{:?}", lines[0]);

    let expected = format!(" [ERROR] w [at {file}:{error}]{RESET}");
    assert!(lines[1].starts_with("\x1b[31m"));
    assert!(lines[1].ends_with(&expected), "{:?}", lines[1]);

    let expected = format!(" [WARN] Custom warning: Network latency high{RESET}");
    assert!(lines[2].starts_with("\x1b[33m"));
    assert!(lines[2].ends_with(&expected));

    let expected = format!(
        " [ERROR] {CRITICAL_MARKER}System overheating! [at {file}:{critical}]{RESET}"
    );
    assert!(lines[3].starts_with("\x1b[31m"));
    assert!(lines[3].ends_with(&expected), "{:?}", lines[3]);

    let expected = format!(" [ERROR] Exceeded max retry attempts: 3{RESET}");
    assert!(lines[4].ends_with(&expected));
    let expected = format!(" [ERROR] explicit [at f.ext:42]{RESET}");
    assert!(lines[5].ends_with(&expected));

    assert!(!stderr.contains("skipped condition"));
    assert!(!stderr.contains("after threshold"));
}

// ============================================================================
// Shared Threshold
// ============================================================================

/// Verifies the threshold functions drive the shared instance.
#[test]
fn threshold_functions_share_the_global_instance() {
    if env::var_os(CHILD_ENV).is_some() {
        return;
    }

    atomlog::set_level(LogLevel::Warn);
    atomlog::set_level(LogLevel::Warn);
    assert_eq!(atomlog::level(), LogLevel::Warn);
    assert_eq!(Logger::instance().level(), LogLevel::Warn);
    assert!(!Logger::instance().enabled(LogLevel::Info));

    atomlog::set_level(LogLevel::Error);
    assert_eq!(Logger::instance().level(), LogLevel::Error);
    atomlog::set_level(LogLevel::Info);
}
