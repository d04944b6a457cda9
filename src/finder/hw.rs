//! `sysctl -n hw.ncpu` command probe — the BSD / macOS logical core count.

use std::num::NonZeroUsize;

use crate::config::{SYSCTL_COMMAND, SYSCTL_NCPU_ARGS};
use crate::finder::proc::first_line;
use crate::finder::{parse_core_count, CpuCoreFinder};

/// Queries the `hw.ncpu` sysctl variable for the logical CPU count.
///
/// Spawns `sysctl -n hw.ncpu`, reads one line of output, and strictly parses
/// it as a positive integer. Every failure mode (process spawning
/// unavailable, spawn error, no output, malformed output, non-positive
/// value) degrades to `None`; the spawned child is reaped in all cases.
#[derive(Clone, Copy, Debug, Default)]
pub struct HwFinder;

impl CpuCoreFinder for HwFinder {
    fn find(&self) -> Option<NonZeroUsize> {
        let line = first_line(SYSCTL_COMMAND, SYSCTL_NCPU_ARGS)?;
        parse_core_count(&line)
    }

    fn label(&self) -> &'static str {
        "hw.ncpu"
    }
}
