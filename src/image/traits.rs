//! Row access shared by the read-only and mutable kernel views.
//!
//! Kernel images are dense: row `y` is the `width` elements starting at
//! `y * width`, so there is no separate stride.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Pixels of row `y`, left to right. Panics past the last row.
    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { view: self, next: 0 }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Self::Pixel {
        self.row(y)[x]
    }
}

/// Views the rasterizer can paint into.
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    #[inline]
    fn get_mut(&mut self, x: usize, y: usize) -> &mut Self::Pixel {
        &mut self.row_mut(y)[x]
    }
}

/// Top-to-bottom iterator over the rows of a kernel view; used when a
/// kernel is tiled into a montage or printed.
pub struct Rows<'a, V: ?Sized + ImageView> {
    view: &'a V,
    next: usize,
}

impl<'a, V: ImageView> Iterator for Rows<'a, V> {
    type Item = &'a [V::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.view.height() {
            return None;
        }
        let view: &'a V = self.view;
        self.next += 1;
        Some(view.row(self.next - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.view.height().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<V: ImageView> ExactSizeIterator for Rows<'_, V> {}
