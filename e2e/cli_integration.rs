// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `corecount` binary as a black-box CLI tool using
// std::process::Command. Covers the default count output, the per-finder
// report, the environment override end-to-end, version/help flags, and
// bad-usage exit codes.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::Command;

/// Locate the `corecount` binary produced by Cargo.
fn corecount_bin() -> PathBuf {
    // CARGO_BIN_EXE_corecount is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_corecount") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("corecount");
    p
}

// ── 1. Default invocation ─────────────────────────────────────────────────────

#[test]
fn default_invocation_prints_a_positive_integer() {
    let output = Command::new(corecount_bin())
        .env_remove("CORECOUNT_NCPU")
        .output()
        .expect("failed to run corecount");

    assert!(output.status.success(), "status: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let count: usize = stdout
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("stdout should be an integer; got: {stdout:?}"));
    assert!(count >= 1, "count must be positive; got {count}");
}

// ── 2. Environment override end-to-end ────────────────────────────────────────

#[test]
fn env_override_wins_over_probing() {
    let output = Command::new(corecount_bin())
        .env("CORECOUNT_NCPU", "7")
        .output()
        .expect("failed to run corecount");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");
}

#[test]
fn malformed_env_override_is_ignored() {
    // "0" fails strict positive parsing, so probing continues and still
    // produces a positive count.
    let output = Command::new(corecount_bin())
        .env("CORECOUNT_NCPU", "0")
        .output()
        .expect("failed to run corecount");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let count: usize = stdout.trim().parse().expect("integer output");
    assert!(count >= 1);
}

// ── 3. Per-finder report ──────────────────────────────────────────────────────

#[test]
fn all_report_lists_every_default_strategy() {
    let output = Command::new(corecount_bin())
        .arg("--all")
        .env("CORECOUNT_NCPU", "3")
        .output()
        .expect("failed to run corecount --all");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for label in ["env", "cpuinfo", "nproc", "hw.ncpu", "count"] {
        assert!(
            stdout.lines().any(|l| l.starts_with(label)),
            "--all output should mention {label}; got:\n{stdout}"
        );
    }
    // With the override set, the effective count is the override.
    let count_line = stdout.lines().find(|l| l.starts_with("count")).unwrap();
    assert!(count_line.trim_end().ends_with('3'), "{count_line}");
}

// ── 4. Version / help ─────────────────────────────────────────────────────────

#[test]
fn version_flag_prints_version_and_exits_zero() {
    let output = Command::new(corecount_bin())
        .arg("--version")
        .output()
        .expect("failed to run corecount --version");

    assert!(output.status.success(), "status: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "--version stdout should contain '0.1.0'; got: {stdout}"
    );
}

#[test]
fn help_flag_exits_zero_and_documents_the_override() {
    let output = Command::new(corecount_bin())
        .arg("--help")
        .output()
        .expect("failed to run corecount --help");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("CORECOUNT_NCPU"),
        "help should document the override variable; got: {stderr}"
    );
}

// ── 5. Bad usage ──────────────────────────────────────────────────────────────

#[test]
fn unknown_option_exits_nonzero_with_bad_usage() {
    let output = Command::new(corecount_bin())
        .arg("--frobnicate")
        .output()
        .expect("failed to run corecount");

    assert!(!output.status.success(), "bad usage must exit non-zero");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bad usage"),
        "stderr should explain bad usage; got: {stderr}"
    );
}

#[test]
fn stray_positional_exits_nonzero() {
    let output = Command::new(corecount_bin())
        .arg("extra")
        .output()
        .expect("failed to run corecount");

    assert!(!output.status.success());
}

// ── 6. Output contract ────────────────────────────────────────────────────────

#[test]
fn output_is_never_zero() {
    // Even with detection sabotaged as far as the CLI allows, the printed
    // value is a positive integer (the fallback default is 1).
    let output = Command::new(corecount_bin())
        .env("CORECOUNT_NCPU", "not-a-number")
        .output()
        .expect("failed to run corecount");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let count: usize = stdout.trim().parse().expect("integer output");
    assert_ne!(count, 0);
    assert!(NonZeroUsize::new(count).is_some());
}
