//! Primitive recipes for each detector kind and the per-cell painter.

use super::CellParams;
use crate::geometry::{bar, place, regular_polygon, Point, Polygon, Winding};
use crate::image::KernelViewMut;
use crate::raster::{multiply_pixel_overlap, sum_pixel_overlap};

/// Half-thickness of each line-detector band (pixels).
const LINE_BAND_THICKNESS: f32 = 0.7;
/// Ratio between the outer (dark) and inner (bright) bands.
const LINE_FLANK_RATIO: f32 = 1.0;
/// Vertex count of the disk that caps the half-space detector.
const CAP_VERTICES: usize = 12;
const HALF_SPACE_DENSITY: f32 = 1.0;

/// How a stroke combines with what is already painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Blend {
    Sum,
    /// Multiply inside the polygon's bounding box, scale everything outside
    /// by `boundary`.
    Multiply { boundary: f32 },
}

/// One polygon painted with a gain, in detector-local coordinates (the line
/// runs along +x through the origin before placement).
#[derive(Clone, Debug)]
pub struct Stroke {
    pub polygon: Polygon,
    pub gain: f32,
    pub blend: Blend,
}

/// Builds the strokes of one cell from its parameters and the primitive
/// half-length.
pub type Recipe = fn(&CellParams, f64) -> Vec<Stroke>;

/// Bright centre band flanked by dark bands: two inner bars with positive
/// gain at the line's edges and two outer bars with negative gain.
pub fn line_recipe(cell: &CellParams, half_length: f64) -> Vec<Stroke> {
    let t = f64::from(LINE_BAND_THICKNESS);
    let r = f64::from(LINE_FLANK_RATIO);
    let (o, w) = (cell.offset, cell.width);
    let outer = -1.0 / LINE_FLANK_RATIO;
    let inner = LINE_FLANK_RATIO;
    let stroke = |y: f64, len: f64, thick: f64, gain: f32| Stroke {
        polygon: bar(Point::new(0.0, y), len, thick),
        gain,
        blend: Blend::Sum,
    };
    vec![
        stroke(o + w / 2.0 + r * t / 2.0, half_length, r * t, outer),
        stroke(o + w / 2.0 - t / 2.0, half_length / r, t, inner),
        stroke(o - w / 2.0 + t / 2.0, half_length / r, t, inner),
        stroke(o - w / 2.0 - r * t / 2.0, half_length, r * t, outer),
    ]
}

/// Step edge: a bar covering the half plane above the offset, masked by a
/// disk of radius `half_length` centred on the edge. The width is unused.
pub fn half_space_recipe(cell: &CellParams, half_length: f64) -> Vec<Stroke> {
    let thick = half_length;
    let body = bar(Point::new(0.0, cell.offset + thick), 2.0 * half_length, thick);
    let cap = regular_polygon(
        Point::new(0.0, cell.offset),
        half_length,
        CAP_VERTICES,
        Winding::CounterClockwise,
    );
    vec![
        Stroke {
            polygon: body,
            gain: HALF_SPACE_DENSITY,
            blend: Blend::Sum,
        },
        Stroke {
            polygon: cap,
            gain: HALF_SPACE_DENSITY,
            blend: Blend::Multiply { boundary: 0.0 },
        },
    ]
}

/// Paints one cell: every stroke is rotated by the cell angle, moved to
/// `anchor` and rasterized into `kernel`.
pub fn render_kernel(
    recipe: Recipe,
    cell: &CellParams,
    half_length: f64,
    anchor: Point,
    kernel: &mut KernelViewMut<'_, f32>,
) {
    for mut stroke in recipe(cell, half_length) {
        place(&mut stroke.polygon, cell.angle, anchor);
        match stroke.blend {
            Blend::Sum => sum_pixel_overlap(&stroke.polygon, stroke.gain, kernel),
            Blend::Multiply { boundary } => {
                multiply_pixel_overlap(&stroke.polygon, stroke.gain, boundary, kernel)
            }
        }
    }
}
