//! `sysconf(_SC_NPROCESSORS_ONLN)` — the POSIX online-processor count.

use std::num::NonZeroUsize;

use crate::finder::CpuCoreFinder;

/// Asks libc for the number of processors currently online.
///
/// `sysconf` returns -1 on error and may in principle report 0 on a
/// misconfigured host; both collapse to `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysconfFinder;

impl CpuCoreFinder for SysconfFinder {
    fn find(&self) -> Option<NonZeroUsize> {
        let count = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        if count > 0 {
            NonZeroUsize::new(count as usize)
        } else {
            None
        }
    }

    fn label(&self) -> &'static str {
        "sysconf"
    }
}
