// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # buffer-core
//!
//! Host-side 2-D `f32` staging buffers for accelerator workloads.
//!
//! This crate provides:
//! - [`Buffer2D`] — an owned, contiguous block of `f32` values addressed by
//!   a coordinate pair, released exactly once when it goes out of scope.
//! - [`BufferView`] — a borrowed, read-only view for bulk-copy collaborators
//!   (e.g., device upload routines) that must not outlive the buffer.
//! - [`Extent`] — the immutable 2-D extent fixed at construction.
//! - [`BufferError`] — allocation and storage-adoption failures.
//!
//! # Design Goals
//! - Scoped ownership: storage lives exactly as long as the buffer value.
//! - Bulk access stays zero-copy via slices and raw pointers.
//! - Clean error types via `thiserror`; allocation failure is surfaced,
//!   never recovered internally.
//!
//! # Addressing
//! The flat offset of a coordinate pair is `x * dim_x + y` — the stride
//! along `x` is `dim_x`. See [`Extent::flat_offset`] for the consequences
//! of that layout on non-square extents.

mod buffer;
mod error;
mod extent;

pub use buffer::{Buffer2D, BufferView};
pub use error::BufferError;
pub use extent::Extent;
