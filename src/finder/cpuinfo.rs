//! `/proc/cpuinfo` entry counting — the file-based Linux strategy.

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::CPUINFO_PATH;
use crate::finder::CpuCoreFinder;

/// Counts `processor` entries in a cpuinfo-format file.
///
/// Each logical CPU contributes one line starting with `processor` in
/// `/proc/cpuinfo`. An unreadable file (the normal case outside Linux) or a
/// file with no entries yields `None`.
#[derive(Clone, Debug)]
pub struct CpuInfoFinder {
    path: PathBuf,
}

impl CpuInfoFinder {
    /// Reads the standard `/proc/cpuinfo` location.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(CPUINFO_PATH),
        }
    }

    /// Reads an alternate cpuinfo-format file. Used by tests and by callers
    /// inspecting a recorded snapshot.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for CpuInfoFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuCoreFinder for CpuInfoFinder {
    fn find(&self) -> Option<NonZeroUsize> {
        let cpuinfo = fs::read_to_string(&self.path).ok()?;
        let count = cpuinfo
            .lines()
            .filter(|line| line.starts_with("processor"))
            .count();
        NonZeroUsize::new(count)
    }

    fn label(&self) -> &'static str {
        "cpuinfo"
    }
}
