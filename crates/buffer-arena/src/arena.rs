// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Budget-enforced buffer allocator with storage reuse.
//!
//! The [`BufferArena`] is the central allocator for staging buffers. It:
//!
//! 1. Enforces a hard ceiling on live bytes — allocations that would
//!    exceed the budget return `Err(OutOfMemory)`.
//! 2. Keeps released storage, keyed by element count, so repeated
//!    allocations of the same extent avoid fresh heap allocation.
//! 3. Tracks allocation statistics for budget tuning.
//!
//! # Thread Safety
//! `BufferArena` is `Send + Sync` and can be shared across threads via
//! `Arc<BufferArena>`. The buffers it hands out remain single-owner.
//!
//! # Storage Reuse
//! Buffers have fixed extents, so spare storage is keyed by exact element
//! count rather than rounded size classes; a reused block always fits the
//! request it is handed to. Reuse can be disabled via [`ArenaConfig`].

use crate::{AllocBudget, ArenaBuffer, ArenaConfig, ArenaError, ArenaStats};
use buffer_core::{Buffer2D, Extent};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Internal arena state, shared with [`ArenaBuffer`] wrappers via `Arc`.
pub(crate) struct ArenaInner {
    /// The live-byte ceiling.
    budget: AllocBudget,
    /// Whether released storage is kept for reuse.
    reuse: bool,
    /// Bytes currently held by live buffers.
    live_bytes: AtomicUsize,
    /// Released storage: element count → available blocks.
    spare: Mutex<HashMap<usize, Vec<Vec<f32>>>>,
    /// Total bytes held in the spare list (for trim accounting).
    spare_bytes: AtomicUsize,
    /// Statistics (behind a Mutex since updates are infrequent).
    stats: Mutex<ArenaStats>,
}

impl ArenaInner {
    /// Called by `ArenaBuffer::drop` to return storage to the arena.
    pub(crate) fn release(&self, storage: Vec<f32>) {
        let size_bytes = storage.len() * std::mem::size_of::<f32>();
        self.live_bytes.fetch_sub(size_bytes, Ordering::Release);

        if let Ok(mut stats) = self.stats.lock() {
            stats.record_release();
        }

        if !self.reuse || storage.is_empty() {
            return;
        }

        self.spare_bytes.fetch_add(size_bytes, Ordering::Release);
        if let Ok(mut spare) = self.spare.lock() {
            spare.entry(storage.len()).or_default().push(storage);
        }
    }
}

/// The primary allocator for staging buffers.
///
/// # Example
/// ```
/// use buffer_arena::{AllocBudget, BufferArena};
///
/// let arena = BufferArena::new(AllocBudget::from_bytes(1024));
///
/// // 8x8 f32 = 256 bytes.
/// let a = arena.allocate(8, 8).unwrap();
/// let b = arena.allocate(8, 8).unwrap();
/// assert_eq!(arena.live_bytes(), 512);
/// assert_eq!(arena.available_bytes(), 512);
///
/// drop(a);
/// drop(b);
/// assert_eq!(arena.live_bytes(), 0);
/// ```
pub struct BufferArena {
    inner: Arc<ArenaInner>,
}

impl BufferArena {
    /// Creates an arena with the given budget and storage reuse enabled.
    pub fn new(budget: AllocBudget) -> Self {
        Self::with_reuse(budget, true)
    }

    /// Creates an arena with explicit reuse behaviour.
    pub fn with_reuse(budget: AllocBudget, reuse: bool) -> Self {
        Self {
            inner: Arc::new(ArenaInner {
                budget,
                reuse,
                live_bytes: AtomicUsize::new(0),
                spare: Mutex::new(HashMap::new()),
                spare_bytes: AtomicUsize::new(0),
                stats: Mutex::new(ArenaStats::default()),
            }),
        }
    }

    /// Creates an arena from a parsed configuration.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let budget = config.parse_budget()?;
        Ok(Self::with_reuse(budget, config.reuse_storage))
    }

    /// Allocates a `dim_x` × `dim_y` buffer.
    ///
    /// Returns `Err(OutOfMemory)` if the allocation would push live bytes
    /// past the budget; the error is surfaced to the caller and never
    /// recovered internally. Released storage of the same element count is
    /// reused (zeroed) when available, otherwise fresh storage is
    /// allocated via [`Buffer2D::new`].
    ///
    /// The returned [`ArenaBuffer`] gives its storage back to the arena
    /// when dropped.
    pub fn allocate(&self, dim_x: usize, dim_y: usize) -> Result<ArenaBuffer, ArenaError> {
        let extent = Extent::new(dim_x, dim_y);
        let requested = extent.size_bytes();

        // Check the ceiling.
        let current = self.inner.live_bytes.load(Ordering::Acquire);
        let budget = self.inner.budget.as_bytes();
        if current + requested > budget {
            if let Ok(mut stats) = self.inner.stats.lock() {
                stats.record_oom();
            }
            tracing::warn!(
                "allocation rejected: {extent} needs {requested} bytes, \
                 {available} of {budget} available",
                available = budget.saturating_sub(current),
            );
            return Err(ArenaError::OutOfMemory {
                dim_x,
                dim_y,
                requested_bytes: requested,
                available_bytes: budget.saturating_sub(current),
                budget_bytes: budget,
            });
        }

        // Try to reuse released storage of the same element count.
        let mut storage = None;
        if extent.num_elements() > 0 {
            if let Ok(mut spare) = self.inner.spare.lock() {
                if let Some(blocks) = spare.get_mut(&extent.num_elements()) {
                    if let Some(mut block) = blocks.pop() {
                        block.fill(0.0);
                        self.inner.spare_bytes.fetch_sub(requested, Ordering::Release);
                        storage = Some(block);
                    }
                }
            }
        }

        let reused = storage.is_some();
        let buffer = match storage {
            Some(block) => Buffer2D::from_vec(dim_x, dim_y, block)?,
            None => Buffer2D::new(dim_x, dim_y)?,
        };
        tracing::debug!(
            "allocated {extent} ({requested} bytes, {})",
            if reused { "reused" } else { "fresh" },
        );

        self.inner.live_bytes.fetch_add(requested, Ordering::Release);

        if let Ok(mut stats) = self.inner.stats.lock() {
            if reused {
                stats.record_reuse_hit();
            } else {
                stats.record_fresh();
            }
            stats.update_peak(self.inner.live_bytes.load(Ordering::Acquire));
        }

        Ok(ArenaBuffer::new(buffer, Arc::clone(&self.inner)))
    }

    /// Returns the bytes currently held by live buffers.
    pub fn live_bytes(&self) -> usize {
        self.inner.live_bytes.load(Ordering::Acquire)
    }

    /// Returns the bytes remaining before the budget is hit.
    pub fn available_bytes(&self) -> usize {
        self.inner
            .budget
            .as_bytes()
            .saturating_sub(self.live_bytes())
    }

    /// Returns the configured budget.
    pub fn budget(&self) -> AllocBudget {
        self.inner.budget
    }

    /// Returns a snapshot of allocation statistics.
    pub fn stats(&self) -> ArenaStats {
        self.inner
            .stats
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Drops all spare storage, releasing it back to the OS.
    ///
    /// Live buffers are unaffected — only the reuse list is cleared.
    pub fn trim(&self) {
        if let Ok(mut spare) = self.inner.spare.lock() {
            spare.clear();
            self.inner.spare_bytes.store(0, Ordering::Release);
        }
    }

    /// Returns the bytes held in the spare list.
    pub fn spare_bytes(&self) -> usize {
        self.inner.spare_bytes.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for BufferArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferArena")
            .field("budget", &self.inner.budget)
            .field("live_bytes", &self.live_bytes())
            .field("available_bytes", &self.available_bytes())
            .finish()
    }
}
