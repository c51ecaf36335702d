// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RAII wrapper that returns buffer storage to the arena on drop.
//!
//! [`ArenaBuffer`] is how Rust's ownership model enforces the arena's
//! accounting: when the wrapper is dropped, the storage goes back to the
//! arena and the live-byte counter is decremented, exactly once. The
//! borrow checker prevents use-after-free at compile time.

use crate::arena::ArenaInner;
use buffer_core::Buffer2D;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// An arena-allocated buffer.
///
/// Dereferences to [`Buffer2D`], so the whole accessor surface — `get`,
/// `set`, `as_slice`, `as_ptr`, `view` — is available directly on the
/// wrapper.
///
/// # Example
/// ```ignore
/// let mut buf = arena.allocate(16, 16)?;
/// buf.set(0, 0, 1.0);       // use the buffer
/// drop(buf);                // storage returned to the arena
/// // buf.get(0, 0);         // compile error — moved value
/// ```
pub struct ArenaBuffer {
    /// The buffer. Wrapped in `Option` so we can `take()` it in `drop()`.
    buffer: Option<Buffer2D>,
    /// Handle back to the arena for release accounting.
    arena: Arc<ArenaInner>,
}

impl ArenaBuffer {
    pub(crate) fn new(buffer: Buffer2D, arena: Arc<ArenaInner>) -> Self {
        Self {
            buffer: Some(buffer),
            arena,
        }
    }
}

impl Deref for ArenaBuffer {
    type Target = Buffer2D;

    fn deref(&self) -> &Buffer2D {
        // Invariant: `buffer` is Some from construction until drop.
        self.buffer.as_ref().expect("buffer present until drop")
    }
}

impl DerefMut for ArenaBuffer {
    fn deref_mut(&mut self) -> &mut Buffer2D {
        self.buffer.as_mut().expect("buffer present until drop")
    }
}

impl Drop for ArenaBuffer {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.arena.release(buffer.into_vec());
        }
    }
}

impl std::fmt::Debug for ArenaBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArenaBuffer")
            .field("extent", &self.deref().extent())
            .field("size_bytes", &self.deref().size_bytes())
            .finish()
    }
}
