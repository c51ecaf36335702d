// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for buffer construction.

use crate::Extent;

/// Errors that can occur when creating a buffer.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// The allocator could not provide backing storage for the requested extent.
    #[error("allocation failed: could not reserve {requested_bytes} bytes for a {dim_x}x{dim_y} buffer")]
    AllocationFailed {
        dim_x: usize,
        dim_y: usize,
        requested_bytes: usize,
    },

    /// The provided storage length does not match the requested extent.
    #[error("storage length mismatch: extent {extent} needs {expected} elements, got {actual}")]
    StorageSizeMismatch {
        extent: Extent,
        expected: usize,
        actual: usize,
    },
}
