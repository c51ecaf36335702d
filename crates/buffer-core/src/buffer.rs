// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The owned 2-D buffer type and its borrowed view.

use crate::{BufferError, Extent};

/// An owned, contiguous block of `f32` values addressed by a coordinate pair.
///
/// `Buffer2D` is the staging area host code fills before handing the data
/// to an accelerator copy routine, and reads back after a download. It owns
/// exactly `dim_x * dim_y` elements for its whole lifetime; the storage is
/// released exactly once when the value is dropped, on every exit path.
///
/// # Addressing
/// `get`/`set` address element `x * dim_x + y` of the flat storage — the
/// stride along `x` is `dim_x`. See [`Extent::flat_offset`] for what that
/// means on non-square extents.
///
/// # Example
/// ```
/// use buffer_core::Buffer2D;
///
/// let mut buf = Buffer2D::new(3, 2)?;
/// buf.set(0, 0, 1.0);
/// buf.set(1, 1, 2.0);
/// assert_eq!(buf.get(0, 0), 1.0);
/// assert_eq!(buf.get(1, 1), 2.0);
/// assert_eq!(buf.dim_x(), 3);
/// assert_eq!(buf.dim_y(), 2);
/// # Ok::<(), buffer_core::BufferError>(())
/// ```
pub struct Buffer2D {
    extent: Extent,
    values: Vec<f32>,
}

impl Buffer2D {
    /// Allocates a zero-filled buffer of `dim_x * dim_y` elements.
    ///
    /// Zero extents are legal and produce an empty buffer. Allocation
    /// failure is surfaced as [`BufferError::AllocationFailed`] rather
    /// than aborting.
    pub fn new(dim_x: usize, dim_y: usize) -> Result<Self, BufferError> {
        let extent = Extent::new(dim_x, dim_y);
        let count = extent.num_elements();

        let mut values = Vec::new();
        values
            .try_reserve_exact(count)
            .map_err(|_| BufferError::AllocationFailed {
                dim_x,
                dim_y,
                requested_bytes: extent.size_bytes(),
            })?;
        values.resize(count, 0.0);

        Ok(Self { extent, values })
    }

    /// Adopts existing storage as a buffer with the given extent.
    ///
    /// Returns [`BufferError::StorageSizeMismatch`] if `values.len()` is
    /// not exactly `dim_x * dim_y`.
    ///
    /// # Examples
    /// ```
    /// use buffer_core::Buffer2D;
    /// let buf = Buffer2D::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(buf.get(1, 1), 4.0);
    /// assert!(Buffer2D::from_vec(2, 2, vec![0.0; 3]).is_err());
    /// ```
    pub fn from_vec(dim_x: usize, dim_y: usize, values: Vec<f32>) -> Result<Self, BufferError> {
        let extent = Extent::new(dim_x, dim_y);
        let expected = extent.num_elements();
        if values.len() != expected {
            return Err(BufferError::StorageSizeMismatch {
                extent,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { extent, values })
    }

    /// Returns the buffer's extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the first dimension size.
    pub fn dim_x(&self) -> usize {
        self.extent.dim_x()
    }

    /// Returns the second dimension size.
    pub fn dim_y(&self) -> usize {
        self.extent.dim_y()
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the memory footprint of the storage in bytes.
    pub fn size_bytes(&self) -> usize {
        self.extent.size_bytes()
    }

    /// Returns the element at flat offset `x * dim_x + y`.
    ///
    /// No per-axis check is performed: any pair whose flat offset lands
    /// inside the storage is answered, including pairs that alias another
    /// coordinate.
    ///
    /// # Panics
    /// Panics if `x * dim_x + y >= len()`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.extent.flat_offset(x, y)]
    }

    /// Writes `value` at flat offset `x * dim_x + y`.
    ///
    /// Same addressing and panic behaviour as [`get`](Self::get).
    ///
    /// # Panics
    /// Panics if `x * dim_x + y >= len()`.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let offset = self.extent.flat_offset(x, y);
        self.values[offset] = value;
    }

    /// Fills the whole storage with a constant value.
    pub fn fill(&mut self, value: f32) {
        self.values.iter_mut().for_each(|v| *v = value);
    }

    /// Returns the whole storage as an immutable slice.
    ///
    /// This is the bounded view bulk-copy collaborators should prefer:
    /// it cannot outlive the buffer and cannot read past the end.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Returns the whole storage as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Returns a raw pointer to the first element.
    ///
    /// For accelerator copy APIs that require a pointer. The pointer is
    /// valid only while the buffer is live and must not be retained past
    /// its lifetime.
    pub fn as_ptr(&self) -> *const f32 {
        self.values.as_ptr()
    }

    /// Returns a raw mutable pointer to the first element.
    ///
    /// Same validity contract as [`as_ptr`](Self::as_ptr).
    pub fn as_mut_ptr(&mut self) -> *mut f32 {
        self.values.as_mut_ptr()
    }

    /// Returns a read-only borrowed view over this buffer.
    pub fn view(&self) -> BufferView<'_> {
        BufferView {
            extent: self.extent,
            values: &self.values,
        }
    }

    /// Consumes the buffer, returning its storage.
    ///
    /// This ends the buffer's lifetime; the storage changes hands exactly
    /// once and the buffer itself is never observable afterwards.
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

impl std::fmt::Debug for Buffer2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer2D")
            .field("extent", &self.extent)
            .field("len", &self.values.len())
            .finish()
    }
}

/// A borrowed, read-only view over a [`Buffer2D`]'s storage.
///
/// Views are zero-copy and tied to the lifetime of the source buffer,
/// enforced by the borrow checker — a collaborator holding a view can
/// never outlive or free the storage.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    extent: Extent,
    values: &'a [f32],
}

impl<'a> BufferView<'a> {
    /// Returns the extent of the viewed buffer.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns the element at flat offset `x * dim_x + y`.
    ///
    /// # Panics
    /// Panics if `x * dim_x + y` is outside the storage.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.extent.flat_offset(x, y)]
    }

    /// Returns the whole storage as a slice.
    pub fn as_slice(&self) -> &'a [f32] {
        self.values
    }

    /// Returns a raw pointer to the first element.
    ///
    /// Valid only while the underlying buffer is live.
    pub fn as_ptr(&self) -> *const f32 {
        self.values.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reports_extents() {
        let buf = Buffer2D::new(3, 2).unwrap();
        assert_eq!(buf.dim_x(), 3);
        assert_eq!(buf.dim_y(), 2);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.size_bytes(), 24);
    }

    #[test]
    fn test_new_is_zeroed() {
        let buf = Buffer2D::new(4, 4).unwrap();
        assert!(buf.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_extent() {
        let buf = Buffer2D::new(0, 7).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.dim_x(), 0);
        assert_eq!(buf.dim_y(), 7);
    }

    #[test]
    fn test_set_get_concrete_scenario() {
        let mut buf = Buffer2D::new(3, 2).unwrap();
        buf.set(0, 0, 1.0);
        buf.set(1, 1, 2.0);
        assert_eq!(buf.get(0, 0), 1.0);
        assert_eq!(buf.get(1, 1), 2.0);
        assert_eq!(buf.dim_x(), 3);
        assert_eq!(buf.dim_y(), 2);
    }

    #[test]
    fn test_set_get_bit_identity() {
        // Round-trips must be exact, including awkward values.
        let mut buf = Buffer2D::new(3, 2).unwrap();
        let values = [0.1_f32, -0.0, f32::MIN_POSITIVE, 1e30, f32::NEG_INFINITY, 3.14159];
        for (k, &v) in values.iter().enumerate() {
            // In-range coordinates: x in 0..dim_y, y in 0..dim_x.
            let (x, y) = (k / 3, k % 3);
            buf.set(x, y, v);
            assert_eq!(buf.get(x, y).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_coordinate_range_roundtrip() {
        // For x in 0..dim_y, y in 0..dim_x every pair round-trips.
        let mut buf = Buffer2D::new(3, 2).unwrap();
        for x in 0..buf.dim_y() {
            for y in 0..buf.dim_x() {
                let v = (x * 10 + y) as f32;
                buf.set(x, y, v);
                assert_eq!(buf.get(x, y), v);
            }
        }
    }

    #[test]
    fn test_slice_and_coordinates_agree() {
        let mut buf = Buffer2D::new(3, 2).unwrap();
        // Write through the slice at flat offset 4.
        buf.as_mut_slice()[4] = 9.5;
        // (1, 1) maps to 1 * 3 + 1 = 4.
        assert_eq!(buf.get(1, 1), 9.5);

        // Write via set, read through the slice.
        buf.set(0, 2, -3.0);
        assert_eq!(buf.as_slice()[2], -3.0);
    }

    #[test]
    fn test_aliasing_pairs_share_an_element() {
        // With dim_x = 2, (0, 2) and (1, 0) both map to offset 2.
        let mut buf = Buffer2D::new(2, 3).unwrap();
        buf.set(0, 2, 7.0);
        assert_eq!(buf.get(1, 0), 7.0);

        buf.set(1, 0, -1.5);
        assert_eq!(buf.get(0, 2), -1.5);
    }

    #[test]
    #[should_panic]
    fn test_get_past_storage_panics() {
        let buf = Buffer2D::new(3, 2).unwrap();
        // Offset 2 * 3 + 0 = 6 is one past the end.
        let _ = buf.get(2, 0);
    }

    #[test]
    #[should_panic]
    fn test_set_past_storage_panics() {
        let mut buf = Buffer2D::new(3, 2).unwrap();
        buf.set(1, 3, 1.0); // offset 6, one past the end
    }

    #[test]
    fn test_ownership_isolation() {
        let mut a = Buffer2D::new(3, 2).unwrap();
        let mut b = Buffer2D::new(3, 2).unwrap();
        a.fill(1.0);
        b.fill(2.0);

        drop(a);

        // Dropping `a` leaves `b` untouched.
        assert!(b.as_slice().iter().all(|&v| v == 2.0));
        b.set(0, 0, 5.0);
        assert_eq!(b.get(0, 0), 5.0);
    }

    #[test]
    fn test_from_vec() {
        let buf = Buffer2D::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(buf.get(0, 0), 1.0);
        assert_eq!(buf.get(1, 1), 4.0);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Buffer2D::from_vec(2, 2, vec![0.0; 5]);
        assert!(matches!(
            result,
            Err(BufferError::StorageSizeMismatch {
                expected: 4,
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_fill() {
        let mut buf = Buffer2D::new(4, 3).unwrap();
        buf.fill(6.25);
        assert!(buf.as_slice().iter().all(|&v| v == 6.25));
    }

    #[test]
    fn test_view() {
        let mut buf = Buffer2D::new(3, 2).unwrap();
        buf.set(1, 2, 8.0);

        let view = buf.view();
        assert_eq!(view.extent(), Extent::new(3, 2));
        assert_eq!(view.get(1, 2), 8.0);
        assert_eq!(view.as_slice().len(), 6);
    }

    #[test]
    fn test_raw_pointer_agrees_with_accessors() {
        let mut buf = Buffer2D::new(3, 2).unwrap();
        buf.set(1, 1, 4.5);

        // Bulk readers see the same element at the mapped offset.
        let ptr = buf.as_ptr();
        let k = buf.extent().flat_offset(1, 1);
        // SAFETY: k < len and the buffer outlives the read.
        let through_ptr = unsafe { *ptr.add(k) };
        assert_eq!(through_ptr, 4.5);

        // And writes through the pointer are visible to get().
        let mut_ptr = buf.as_mut_ptr();
        // SAFETY: offset 0 is in bounds and no other reference is live.
        unsafe { *mut_ptr = 11.0 };
        assert_eq!(buf.get(0, 0), 11.0);
    }

    #[test]
    fn test_into_vec() {
        let mut buf = Buffer2D::new(2, 2).unwrap();
        buf.set(0, 1, 3.0);
        let storage = buf.into_vec();
        assert_eq!(storage, vec![0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_debug_format() {
        let buf = Buffer2D::new(3, 2).unwrap();
        let debug = format!("{buf:?}");
        assert!(debug.contains("Buffer2D"));
        assert!(debug.contains("3x2"));
    }
}
