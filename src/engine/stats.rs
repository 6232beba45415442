// ============================================================================
// Recursion Statistics
// Lock-free counters shared by every branch of one multiplication
// ============================================================================

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters updated by the recursion, safe to share across forked workers.
#[derive(Debug, Default)]
pub struct RecursionStats {
    calls: AtomicU64,
    base_cases: AtomicU64,
    max_depth: AtomicUsize,
    forks: AtomicU64,
}

impl RecursionStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_call(&self, depth: usize) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_base_case(&self) {
        self.base_cases.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_fork(&self) {
        self.forks.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters.
    ///
    /// Only meaningful once every worker has joined.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            calls: self.calls.load(Ordering::Acquire),
            base_cases: self.base_cases.load(Ordering::Acquire),
            max_depth: self.max_depth.load(Ordering::Acquire),
            forks: self.forks.load(Ordering::Acquire),
        }
    }
}

/// Plain copy of [`RecursionStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsSnapshot {
    /// Recursive invocations, the top-level call included
    pub calls: u64,
    /// Invocations answered by the base multiplier
    pub base_cases: u64,
    /// Deepest recursion level reached (top level is 0)
    pub max_depth: usize,
    /// Levels that ran their sub-products on worker threads
    pub forks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = RecursionStats::new();
        stats.record_call(0);
        stats.record_call(3);
        stats.record_call(1);
        stats.record_base_case();
        stats.record_fork();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.calls, 3);
        assert_eq!(snapshot.base_cases, 1);
        assert_eq!(snapshot.max_depth, 3);
        assert_eq!(snapshot.forks, 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let stats = RecursionStats::new();
        crossbeam::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for _ in 0..100 {
                        stats.record_base_case();
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(stats.snapshot().base_cases, 400);
    }
}
