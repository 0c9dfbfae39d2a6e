//! Borrowed 2-D views over one kernel image inside a [`crate::grid::Grid`].
//!
//! A kernel image is a contiguous `width × height` block (row stride equals
//! the width), addressed by the last two element strides of the grid.

use super::traits::{ImageView, ImageViewMut};

/// Read-only kernel image.
#[derive(Clone, Copy, Debug)]
pub struct KernelView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T: Copy> KernelView<'a, T> {
    /// Wraps the first `width * height` elements of `data`.
    pub fn new(data: &'a [T], width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: &data[..width * height],
        }
    }

    pub fn pixels(&self) -> &'a [T] {
        self.data
    }
}

impl KernelView<'_, f32> {
    /// Sum of all pixel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Dot product with an equally sized patch, the scoring primitive used
    /// by trackers. `patch` must hold exactly one kernel image.
    pub fn dot(&self, patch: &[f32]) -> f32 {
        debug_assert_eq!(patch.len(), self.data.len(), "patch size mismatch");
        self.data.iter().zip(patch).map(|(k, p)| k * p).sum()
    }
}

impl<T: Copy> ImageView for KernelView<'_, T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

/// Mutable kernel image; the rasterizer paints into these.
#[derive(Debug)]
pub struct KernelViewMut<'a, T> {
    width: usize,
    height: usize,
    data: &'a mut [T],
}

impl<'a, T: Copy> KernelViewMut<'a, T> {
    /// Wraps the first `width * height` elements of `data`.
    pub fn new(data: &'a mut [T], width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: &mut data[..width * height],
        }
    }

    pub fn as_view(&self) -> KernelView<'_, T> {
        KernelView {
            width: self.width,
            height: self.height,
            data: &*self.data,
        }
    }

    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T: Copy> ImageView for KernelViewMut<'_, T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl<T: Copy> ImageViewMut for KernelViewMut<'_, T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}
