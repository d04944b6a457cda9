//! One-shot child-process probe shared by the command-based finders.
//!
//! The probe spawns a command with stdout piped, reads a single line, and
//! reaps the child before returning, on every path (read and parse failures
//! included). There is no retry and no timeout; a hang in the probed command
//! is not mitigated.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

/// Returns `true` when the target supports spawning child processes at all.
///
/// On targets without a process facility (wasm) the command finders bail out
/// before constructing a `Command`.
pub fn can_spawn_processes() -> bool {
    cfg!(not(target_family = "wasm"))
}

/// Runs `program` with `args` and returns the first line of its stdout.
///
/// The line is returned as read, trailing newline included; callers trim.
/// Any failure (spawn, read error, empty output) yields `None`.
pub fn first_line(program: &str, args: &[&str]) -> Option<String> {
    if !can_spawn_processes() {
        return None;
    }

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    // Read one line, then drop the pipe before reaping so a child that
    // writes more than one line sees EOF instead of blocking the wait().
    let line = match child.stdout.take() {
        Some(out) => {
            let mut buf = String::new();
            match BufReader::new(out).read_line(&mut buf) {
                Ok(n) if n > 0 => Some(buf),
                _ => None,
            }
        }
        None => None,
    };

    // Reap unconditionally; a probe must never leave a zombie behind.
    let _ = child.wait();

    line
}
