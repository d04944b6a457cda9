// config.rs — Compile-time configuration constants.
//
// Detection is best-effort: every constant here has a runtime escape hatch
// (the CORECOUNT_NCPU environment variable, or an explicit finder list passed
// to CpuCoreCounter::new) rather than a rebuild.

use std::num::NonZeroUsize;

// Core count reported when every detection strategy fails.
// Callers sizing a worker pool get a safe serial default rather than an error.
pub const DEFAULT_CORE_COUNT: NonZeroUsize = NonZeroUsize::MIN;

// Environment variable consulted by the highest-priority finder.
// Setting it to a positive integer overrides all hardware probing.
pub const ENV_NCPU: &str = "CORECOUNT_NCPU";

// Per-CPU entry listing read by the file-based finder (Linux).
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

// Command probe for BSD / macOS: `sysctl -n hw.ncpu` prints the logical
// core count as a single line. `-n` suppresses the variable name.
pub const SYSCTL_COMMAND: &str = "sysctl";
pub const SYSCTL_NCPU_ARGS: &[&str] = &["-n", "hw.ncpu"];

// Command probe for Linux / coreutils platforms.
pub const NPROC_COMMAND: &str = "nproc";
