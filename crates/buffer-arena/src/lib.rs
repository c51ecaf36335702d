// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # buffer-arena
//!
//! Budget-enforced allocation of [`buffer_core`] staging buffers for
//! memory-constrained accelerator hosts.
//!
//! # Key Components
//!
//! - [`AllocBudget`] — a hard ceiling on live buffer bytes with
//!   human-readable parsing (`"64M"`, `"1G"`, etc.).
//! - [`BufferArena`] — the allocator: enforces the budget, keeps released
//!   storage for reuse, and tracks statistics.
//! - [`ArenaBuffer`] — an RAII wrapper around an allocated buffer. When the
//!   wrapper is dropped, its storage is automatically returned to the
//!   arena. The borrow checker prevents use-after-free at compile time.
//! - [`ArenaStats`] — cumulative allocator metrics (peak usage, reuse
//!   ratio, OOM count).
//! - [`ArenaConfig`] — TOML-loadable configuration for embedding hosts.
//!
//! # Ownership Model
//!
//! ```text
//! BufferArena::allocate(dim_x, dim_y)
//!       │
//!       ▼
//!   ArenaBuffer  ◄─── owns Buffer2D, holds Arc<ArenaInner>
//!       │
//!       │  drop()
//!       ▼
//!   ArenaInner::release()  ──► spare storage
//! ```
//!
//! The arena hands out `ArenaBuffer`s; each one holds an `Arc` back to the
//! arena's inner state. On drop, the wrapper returns the element storage to
//! the spare list and decrements the live-byte counter — release happens
//! exactly once, on every exit path.
//!
//! # Example
//! ```
//! use buffer_arena::{AllocBudget, BufferArena};
//!
//! let arena = BufferArena::new(AllocBudget::from_mb(4));
//!
//! let mut weights = arena.allocate(16, 16).unwrap();
//! weights.set(0, 0, 0.5);
//! assert_eq!(weights.get(0, 0), 0.5);
//! assert_eq!(arena.live_bytes(), 16 * 16 * 4);
//!
//! // Returning storage is automatic.
//! drop(weights);
//! assert_eq!(arena.live_bytes(), 0);
//! ```

mod arena;
mod budget;
mod config;
mod error;
mod guard;
mod stats;

pub use arena::BufferArena;
pub use budget::AllocBudget;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use guard::ArenaBuffer;
pub use stats::ArenaStats;
