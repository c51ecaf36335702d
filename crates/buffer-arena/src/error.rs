// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for arena allocation.

/// Errors that can occur during arena allocation and configuration.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    /// The requested buffer would push live bytes past the budget.
    #[error("out of memory: requested {requested_bytes} bytes for a {dim_x}x{dim_y} buffer, but only {available_bytes} of {budget_bytes} available")]
    OutOfMemory {
        dim_x: usize,
        dim_y: usize,
        requested_bytes: usize,
        available_bytes: usize,
        budget_bytes: usize,
    },

    /// A budget string could not be parsed.
    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The underlying buffer construction failed.
    #[error(transparent)]
    Buffer(#[from] buffer_core::BufferError),
}
