//! Finder orchestration — tries detection strategies in priority order.

use std::num::NonZeroUsize;

use crate::config::DEFAULT_CORE_COUNT;
use crate::finder::{
    AvailableParallelismFinder, CpuCoreFinder, CpuInfoFinder, EnvFinder, HwFinder, NProcFinder,
};
#[cfg(unix)]
use crate::finder::SysconfFinder;

/// Runs an ordered list of [`CpuCoreFinder`]s and reports the first answer.
///
/// Nothing is cached: every call re-runs the finders, so a probe that spawns
/// a process spawns it again on the next call.
pub struct CpuCoreCounter {
    finders: Vec<Box<dyn CpuCoreFinder>>,
}

impl CpuCoreCounter {
    /// Builds a counter over an explicit finder chain.
    pub fn new(finders: Vec<Box<dyn CpuCoreFinder>>) -> Self {
        Self { finders }
    }

    /// The first core count any finder produces, in chain order.
    pub fn find(&self) -> Option<NonZeroUsize> {
        self.finders.iter().find_map(|finder| finder.find())
    }

    /// Like [`find`](Self::find), but falls back to the serial default of 1
    /// when every strategy fails.
    pub fn count(&self) -> NonZeroUsize {
        self.find().unwrap_or(DEFAULT_CORE_COUNT)
    }

    /// The configured finder chain, in priority order.
    pub fn finders(&self) -> &[Box<dyn CpuCoreFinder>] {
        &self.finders
    }
}

impl Default for CpuCoreCounter {
    fn default() -> Self {
        Self::new(default_finders())
    }
}

/// The default detection chain, in priority order: explicit environment
/// override first, then the cheap file read, then the command probes, then
/// the in-process fallbacks.
pub fn default_finders() -> Vec<Box<dyn CpuCoreFinder>> {
    let mut finders: Vec<Box<dyn CpuCoreFinder>> = vec![
        Box::new(EnvFinder::new()),
        Box::new(CpuInfoFinder::new()),
        Box::new(NProcFinder::new()),
        Box::new(HwFinder),
    ];
    #[cfg(unix)]
    finders.push(Box::new(SysconfFinder));
    finders.push(Box::new(AvailableParallelismFinder));
    finders
}
