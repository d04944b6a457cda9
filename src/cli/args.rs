//! Command-line argument parsing for the `corecount` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Short options may be aggregated (e.g. `-av`). Bad or unrecognised options
//! return an `Err` with a human-readable message that begins with
//! `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::constants::{display_level, set_display_level};
use crate::cli::help::{print_usage, print_version};

// ── Public output type ────────────────────────────────────────────────────────

/// Options produced by the argument parsing loop.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Report every default finder's individual answer (`-a` / `--all`).
    pub report_all: bool,
    /// When `true`, a --version / --help flag was processed; the caller
    /// should exit 0 without running detection.
    pub exit_early: bool,
    /// Program name (argv[0]), used by help text.
    pub exe_name: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parse an explicit argument list.
///
/// `exe_name` is argv[0] (used for help text). `argv` is argv[1..].
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut report_all = false;
    let mut exit_early = false;

    for argument in argv {
        if argument.is_empty() {
            continue;
        }

        // ── Long options ──────────────────────────────────────────────────
        match argument.as_str() {
            "--all" => {
                report_all = true;
                continue;
            }
            "--help" => {
                print_usage(exe_name);
                exit_early = true;
                continue;
            }
            "--version" => {
                print_version();
                exit_early = true;
                continue;
            }
            "--verbose" => {
                set_display_level(display_level() + 1);
                continue;
            }
            "--quiet" => {
                set_display_level(display_level().saturating_sub(1));
                continue;
            }
            _ => {}
        }

        // ── Aggregated short options ──────────────────────────────────────
        if let Some(flags) = argument.strip_prefix('-') {
            if flags.is_empty() || argument.starts_with("--") {
                return Err(anyhow!("bad usage: unknown option: {}", argument));
            }
            for flag in flags.chars() {
                match flag {
                    'a' => report_all = true,
                    'v' => set_display_level(display_level() + 1),
                    'q' => set_display_level(display_level().saturating_sub(1)),
                    'V' => {
                        print_version();
                        exit_early = true;
                    }
                    'h' | 'H' => {
                        print_usage(exe_name);
                        exit_early = true;
                    }
                    _ => {
                        return Err(anyhow!("bad usage: unknown option: -{}", flag));
                    }
                }
            }
            continue;
        }

        // Positional arguments carry no meaning here.
        return Err(anyhow!("bad usage: unexpected argument: {}", argument));
    }

    Ok(ParsedArgs {
        report_all,
        exit_early,
        exe_name: exe_name.to_owned(),
    })
}
