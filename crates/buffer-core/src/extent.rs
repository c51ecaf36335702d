// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Buffer extent descriptor and flat-offset computation.

use std::fmt;

/// The fixed 2-D extent of a [`crate::Buffer2D`].
///
/// Extents are immutable once created. The constructor performs no
/// validation: zero extents are legal and describe an empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    dim_x: usize,
    dim_y: usize,
}

impl Extent {
    /// Creates a new extent from the two dimension sizes.
    ///
    /// # Examples
    /// ```
    /// use buffer_core::Extent;
    /// let e = Extent::new(3, 2);
    /// assert_eq!(e.num_elements(), 6);
    /// assert_eq!(e.size_bytes(), 24);
    /// ```
    pub fn new(dim_x: usize, dim_y: usize) -> Self {
        Self { dim_x, dim_y }
    }

    /// Returns the first dimension size.
    pub fn dim_x(&self) -> usize {
        self.dim_x
    }

    /// Returns the second dimension size.
    pub fn dim_y(&self) -> usize {
        self.dim_y
    }

    /// Returns the total number of elements, `dim_x * dim_y`.
    pub fn num_elements(&self) -> usize {
        self.dim_x * self.dim_y
    }

    /// Returns the memory footprint of a buffer with this extent in bytes.
    pub fn size_bytes(&self) -> usize {
        self.num_elements() * std::mem::size_of::<f32>()
    }

    /// Computes the flat storage offset of a coordinate pair.
    ///
    /// The offset is `x * dim_x + y`: the stride along `x` is `dim_x`,
    /// not `dim_y`. Two consequences follow for non-square extents:
    ///
    /// - the in-range values of `x` run over `0..dim_y` (there are
    ///   `dim_x * dim_y` elements and each step in `x` advances `dim_x`);
    /// - distinct coordinate pairs can alias the same offset, e.g. with
    ///   `dim_x = 2` both `(0, 2)` and `(1, 0)` map to offset 2.
    ///
    /// Callers that iterate coordinates must bound them accordingly.
    ///
    /// # Examples
    /// ```
    /// use buffer_core::Extent;
    /// let e = Extent::new(3, 2);
    /// assert_eq!(e.flat_offset(0, 0), 0);
    /// assert_eq!(e.flat_offset(1, 1), 4);
    /// ```
    pub fn flat_offset(&self, x: usize, y: usize) -> usize {
        x * self.dim_x + y
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.dim_x, self.dim_y)
    }
}

/// Convenience: `Extent::from((3, 2))`.
impl From<(usize, usize)> for Extent {
    fn from((dim_x, dim_y): (usize, usize)) -> Self {
        Self::new(dim_x, dim_y)
    }
}
