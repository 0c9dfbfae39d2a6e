//! Paint polygons into kernel images by exact pixel overlap.
//!
//! Pixels are unit squares: pixel `(x, y)` covers `[x, x+1] × [y, y+1]`.
//! Only pixels within the polygon's bounding box (clamped to the image) are
//! visited.

use crate::error::BankError;
use crate::geometry::{AxisAlignedBox, Point};
use crate::image::{ImageView, ImageViewMut, KernelViewMut};
use crate::overlap::overlap_area;
use log::warn;

/// Counter-clockwise unit square of pixel `(x, y)`.
#[inline]
pub fn pixel_quad(x: usize, y: usize) -> [Point; 4] {
    let (x, y) = (x as f64, y as f64);
    [
        Point::new(x, y),
        Point::new(x + 1.0, y),
        Point::new(x + 1.0, y + 1.0),
        Point::new(x, y + 1.0),
    ]
}

/// Inclusive pixel range touched by a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
}

impl PixelBounds {
    /// `floor(min)` clamped below by 0 and `ceil(max)` clamped above by the
    /// last pixel. The upper bound is seeded at 0, so a polygon entirely left
    /// of (or above) the image still visits the first column (row).
    ///
    /// Returns `None` for an empty image or polygon, or when the range is
    /// empty after clamping.
    pub fn of(polygon: &[Point], width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || polygon.is_empty() {
            return None;
        }
        let b = AxisAlignedBox::from_points(polygon);
        let (x0, x1) = clamp_axis(b.min.x, b.max.x, width)?;
        let (y0, y1) = clamp_axis(b.min.y, b.max.y, height)?;
        Some(Self { x0, x1, y0, y1 })
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

fn clamp_axis(min: f64, max: f64, extent: usize) -> Option<(usize, usize)> {
    let last = (extent - 1) as f64;
    let lo = min.floor().max(0.0);
    let hi = max.ceil().max(0.0).min(last);
    // NaN coordinates fail both comparisons.
    if !(lo <= hi) {
        return None;
    }
    Some((lo as usize, hi as usize))
}

/// Overlap of `polygon` with pixel `(x, y)`; degenerate bounds count as no
/// overlap.
fn pixel_overlap(polygon: &[Point], x: usize, y: usize) -> f64 {
    match overlap_area(polygon, &pixel_quad(x, y)) {
        Ok(a) => a,
        Err(err @ BankError::DegenerateBounds { .. }) => {
            warn!("pixel ({x}, {y}) skipped: {err}");
            0.0
        }
        Err(err) => {
            warn!("pixel ({x}, {y}) skipped: unexpected {err}");
            0.0
        }
    }
}

/// Adds `gain × overlap` to every pixel in the polygon's bounding box.
pub fn sum_pixel_overlap(polygon: &[Point], gain: f32, kernel: &mut KernelViewMut<'_, f32>) {
    let Some(bounds) = PixelBounds::of(polygon, kernel.width(), kernel.height()) else {
        return;
    };
    for y in bounds.y0..=bounds.y1 {
        for x in bounds.x0..=bounds.x1 {
            let a = pixel_overlap(polygon, x, y) as f32;
            *kernel.get_mut(x, y) += gain * a;
        }
    }
}

/// Multiplies every pixel in the polygon's bounding box by `gain × overlap`
/// and every pixel outside it by `boundary`.
pub fn multiply_pixel_overlap(
    polygon: &[Point],
    gain: f32,
    boundary: f32,
    kernel: &mut KernelViewMut<'_, f32>,
) {
    let bounds = PixelBounds::of(polygon, kernel.width(), kernel.height());
    for y in 0..kernel.height() {
        let row = kernel.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            match bounds {
                Some(b) if b.contains(x, y) => *px *= gain * pixel_overlap(polygon, x, y) as f32,
                _ => *px *= boundary,
            }
        }
    }
}
