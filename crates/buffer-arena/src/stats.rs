// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation statistics for profiling and budget tuning.

/// Cumulative counters describing how a [`crate::BufferArena`] is used.
///
/// Snapshots are cheap to clone and serialisable, so hosts can export them
/// alongside their own telemetry.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ArenaStats {
    /// Total number of allocation requests, successful or not.
    pub total_allocations: u64,
    /// Allocations served from previously released storage.
    pub reuse_hits: u64,
    /// Allocations that required fresh storage.
    pub fresh_allocations: u64,
    /// Requests rejected because they would exceed the budget.
    pub oom_count: u64,
    /// Number of buffers returned to the arena.
    pub total_releases: u64,
    /// High-water mark of live bytes.
    pub peak_live_bytes: usize,
}

impl ArenaStats {
    /// Returns the fraction of successful allocations served by reuse,
    /// in `[0.0, 1.0]`. Returns `0.0` before any allocation.
    pub fn reuse_ratio(&self) -> f64 {
        let served = self.reuse_hits + self.fresh_allocations;
        if served == 0 {
            return 0.0;
        }
        self.reuse_hits as f64 / served as f64
    }

    pub(crate) fn record_reuse_hit(&mut self) {
        self.total_allocations += 1;
        self.reuse_hits += 1;
    }

    pub(crate) fn record_fresh(&mut self) {
        self.total_allocations += 1;
        self.fresh_allocations += 1;
    }

    pub(crate) fn record_oom(&mut self) {
        self.total_allocations += 1;
        self.oom_count += 1;
    }

    pub(crate) fn record_release(&mut self) {
        self.total_releases += 1;
    }

    pub(crate) fn update_peak(&mut self, live_bytes: usize) {
        if live_bytes > self.peak_live_bytes {
            self.peak_live_bytes = live_bytes;
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        let peak_kb = self.peak_live_bytes as f64 / 1024.0;
        format!(
            "Allocations: {} total ({} reused, {} fresh, {:.0}% reuse), \
             {} OOMs, peak {:.1} KB live, {} releases",
            self.total_allocations,
            self.reuse_hits,
            self.fresh_allocations,
            self.reuse_ratio() * 100.0,
            self.oom_count,
            peak_kb,
            self.total_releases,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let s = ArenaStats::default();
        assert_eq!(s.total_allocations, 0);
        assert_eq!(s.reuse_ratio(), 0.0);
    }

    #[test]
    fn test_reuse_ratio() {
        let mut s = ArenaStats::default();
        s.record_reuse_hit();
        s.record_reuse_hit();
        s.record_fresh();
        assert!((s.reuse_ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_oom_does_not_affect_reuse_ratio() {
        let mut s = ArenaStats::default();
        s.record_fresh();
        s.record_oom();
        assert_eq!(s.total_allocations, 2);
        assert_eq!(s.reuse_ratio(), 0.0);
    }

    #[test]
    fn test_peak_tracking() {
        let mut s = ArenaStats::default();
        s.update_peak(100);
        s.update_peak(40);
        assert_eq!(s.peak_live_bytes, 100);
        s.update_peak(250);
        assert_eq!(s.peak_live_bytes, 250);
    }

    #[test]
    fn test_summary() {
        let mut s = ArenaStats::default();
        s.record_fresh();
        s.record_reuse_hit();
        s.update_peak(2048);
        let summary = s.summary();
        assert!(summary.contains("2 total"));
        assert!(summary.contains("1 reused"));
        assert!(summary.contains("1 fresh"));
    }
}
