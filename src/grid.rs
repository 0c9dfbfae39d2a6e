//! Dense five-dimensional kernel storage.
//!
//! Logical dimensions, innermost first: image column, image row, offset
//! index, width index, angle index. Strides are kept in
//! outermost-first arrays of length `NDIM + 1`:
//!
//! | slot | element stride                      |
//! |------|-------------------------------------|
//! | 0    | whole buffer                        |
//! | 1    | one angle step                      |
//! | 2    | one width step                      |
//! | 3    | one offset step (= one kernel image)|
//! | 4    | one image row                       |
//! | 5    | one element (= 1)                   |
//!
//! Byte strides are the element strides times `size_of::<T>()`.

use crate::image::{KernelView, KernelViewMut};
use std::mem::size_of;

/// Number of logical dimensions.
pub const NDIM: usize = 5;

#[derive(Clone, Debug)]
pub struct Grid<T = f32> {
    shape: [usize; NDIM],
    strides: [usize; NDIM + 1],
    byte_strides: [usize; NDIM + 1],
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocates a zeroed grid. `shape` is innermost-first:
    /// `[columns, rows, n_offset, n_width, n_angle]`.
    pub fn new(shape: [usize; NDIM]) -> Self {
        let mut strides = [0usize; NDIM + 1];
        strides[NDIM] = 1;
        for i in (0..NDIM).rev() {
            strides[i] = strides[i + 1] * shape[NDIM - 1 - i];
        }
        let element_size = size_of::<T>();
        let byte_strides = strides.map(|s| s * element_size);
        let len = shape.iter().product();
        Self {
            shape,
            strides,
            byte_strides,
            data: vec![T::default(); len],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Shape as given to [`Grid::new`] (innermost-first).
    pub fn shape(&self) -> [usize; NDIM] {
        self.shape
    }

    /// Extents outermost-first, aligned with the stride slots:
    /// `strides()[i] == strides()[i + 1] * dims()[i]`.
    pub fn dims(&self) -> [usize; NDIM] {
        let mut d = self.shape;
        d.reverse();
        d
    }

    /// Element strides (slot 5 is 1).
    pub fn strides(&self) -> &[usize; NDIM + 1] {
        &self.strides
    }

    /// Byte strides (slot 5 is the element size).
    pub fn byte_strides(&self) -> &[usize; NDIM + 1] {
        &self.byte_strides
    }

    pub fn element_size(&self) -> usize {
        self.byte_strides[NDIM]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn image_width(&self) -> usize {
        self.shape[0]
    }

    pub fn image_height(&self) -> usize {
        self.shape[1]
    }

    /// Elements in one kernel image.
    pub fn image_len(&self) -> usize {
        self.strides[3]
    }

    /// Flat element offset of the kernel image for one discretized cell.
    /// Unchecked: callers keep the indices inside the extents.
    #[inline]
    pub fn index(&self, ioffset: usize, iwidth: usize, iangle: usize) -> usize {
        iangle * self.strides[1] + iwidth * self.strides[2] + ioffset * self.strides[3]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Kernel image starting at flat offset `index`.
    pub fn kernel(&self, index: usize) -> KernelView<'_, T> {
        let len = self.image_len();
        KernelView::new(
            &self.data[index..index + len],
            self.image_width(),
            self.image_height(),
        )
    }

    pub fn kernel_mut(&mut self, index: usize) -> KernelViewMut<'_, T> {
        let (len, w, h) = (self.image_len(), self.image_width(), self.image_height());
        KernelViewMut::new(&mut self.data[index..index + len], w, h)
    }
}
