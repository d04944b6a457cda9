// Integration tests for finder::proc — the one-shot command probe.
//
// Probe commands are mocked with throwaway shell scripts so the tests
// exercise the real spawn / read-one-line / reap sequence without depending
// on `sysctl` or `nproc` being installed on the test host:
//   - Mocked output "16\n" parses to 16 end-to-end
//   - Malformed output (named sysctl form) is rejected, not extracted
//   - A silent command, or one that cannot be spawned, yields None
//   - Repeated probing leaks neither file descriptors nor zombies

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use corecount::finder::proc::{can_spawn_processes, first_line};
use corecount::parse_core_count;
use tempfile::TempDir;

/// Write an executable shell script into `dir` and return its path.
fn make_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

// ─────────────────────────────────────────────────────────────────────────────
// End-to-end probe behaviour
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mocked_sysctl_output_parses_to_16() {
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "fake-sysctl", "echo 16");

    let line = first_line(script.to_str().unwrap(), &[]).expect("script should produce a line");
    assert_eq!(line, "16\n");
    assert_eq!(parse_core_count(&line).map(|n| n.get()), Some(16));
}

#[test]
fn named_sysctl_output_is_unknown() {
    // A probe missing `-n` prints "hw.ncpu: 4"; strict parsing must reject it.
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "fake-sysctl", "echo 'hw.ncpu: 4'");

    let line = first_line(script.to_str().unwrap(), &[]).unwrap();
    assert_eq!(parse_core_count(&line), None);
}

#[test]
fn probe_reads_only_the_first_line() {
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "chatty", "echo 4; echo 8; echo 12");

    let line = first_line(script.to_str().unwrap(), &[]).unwrap();
    assert_eq!(line, "4\n");
}

#[test]
fn arguments_are_forwarded() {
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "echo-arg", r#"echo "$2""#);

    let line = first_line(script.to_str().unwrap(), &["-n", "6"]).unwrap();
    assert_eq!(parse_core_count(&line).map(|n| n.get()), Some(6));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn silent_probe_is_unknown() {
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "silent", "exit 0");

    assert_eq!(first_line(script.to_str().unwrap(), &[]), None);
}

#[test]
fn unspawnable_probe_is_unknown() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert_eq!(first_line(missing.to_str().unwrap(), &[]), None);
}

#[test]
fn failing_probe_with_output_still_reads_the_line() {
    // Exit status is deliberately ignored; only the output line matters.
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "failing", "echo 2; exit 1");

    let line = first_line(script.to_str().unwrap(), &[]).unwrap();
    assert_eq!(parse_core_count(&line).map(|n| n.get()), Some(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn repeated_probing_does_not_exhaust_resources() {
    // Each call must close its pipe and reap its child; a leak shows up as
    // spawn failures well before 128 iterations.
    let dir = TempDir::new().unwrap();
    let script = make_script(&dir, "fake-sysctl", "echo 16");
    let program = script.to_str().unwrap();

    for _ in 0..128 {
        assert_eq!(first_line(program, &[]).as_deref(), Some("16\n"));
    }
}

#[test]
fn spawning_is_supported_on_unix_hosts() {
    assert!(can_spawn_processes());
}
