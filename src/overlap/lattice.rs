//! Integer lattice fitting with tie-breaking perturbation bits.
//!
//! Floating point vertices are mapped onto a shared lattice of `GAMUT`
//! units per bounding-box side. The bottom three bits of each coordinate are
//! replaced by a per-polygon tag and (for x) the vertex parity, so that no
//! vertex of one polygon can coincide with a vertex of the other. This is
//! the simulation-of-simplicity trick of Edelsbrunner & Mücke (1990).

use crate::error::BankError;
use crate::geometry::{AxisAlignedBox, Point};

/// Lattice units spanned by the union bounding box along each axis.
pub const GAMUT: f64 = 500_000_000.0;
const MID: f64 = GAMUT / 2.0;
const LOW_BITS: i64 = 7;

/// Low-bit tag distinguishing the two polygons of one overlap test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeTag {
    /// The detector primitive.
    Subject,
    /// The pixel quad.
    Pixel,
}

impl LatticeTag {
    #[inline]
    fn bits(self) -> i64 {
        match self {
            LatticeTag::Subject => 0,
            LatticeTag::Pixel => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
}

/// Closed interval `[lo, hi]` covered by one edge along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    #[inline]
    pub fn ordered(a: i64, b: i64) -> Self {
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Open-interval intersection test.
    #[inline]
    pub fn overlaps(self, other: Span) -> bool {
        self.lo < other.hi && other.lo < self.hi
    }

    #[inline]
    pub fn contains_open(self, v: i64) -> bool {
        self.lo < v && v < self.hi
    }
}

/// One fitted vertex together with the spans of the edge that starts at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeVertex {
    pub point: LatticePoint,
    pub x_span: Span,
    pub y_span: Span,
    /// Winding change picked up when walking past this vertex; filled in by
    /// the crossing pass.
    pub winding_delta: i32,
}

/// Per-axis mapping from pixel space onto the lattice.
#[derive(Clone, Copy, Debug)]
pub struct LatticeScale {
    origin: Point,
    sx: f64,
    sy: f64,
}

impl LatticeScale {
    pub fn new(bounds: &AxisAlignedBox) -> Result<Self, BankError> {
        let (w, h) = (bounds.width(), bounds.height());
        let sx = GAMUT / w;
        let sy = GAMUT / h;
        let finite = w.is_finite() && h.is_finite() && sx.is_finite() && sy.is_finite();
        if !(finite && w > 0.0 && h > 0.0) {
            return Err(BankError::DegenerateBounds {
                width: w,
                height: h,
            });
        }
        Ok(Self {
            origin: bounds.min,
            sx,
            sy,
        })
    }

    /// Lattice area of one unit of pixel area.
    #[inline]
    pub fn area_factor(&self) -> f64 {
        self.sx * self.sy
    }

    /// Fits `points` onto the lattice, returning `points.len() + 1` vertices
    /// (the ring is closed by repeating vertex 0).
    pub fn fit(&self, points: &[Point], tag: LatticeTag) -> Vec<LatticeVertex> {
        let n = points.len();
        let mut ring: Vec<LatticeVertex> = points
            .iter()
            .enumerate()
            .map(|(c, p)| {
                let x = ((p.x - self.origin.x) * self.sx - MID).floor() as i64;
                let y = ((p.y - self.origin.y) * self.sy - MID).floor() as i64;
                LatticeVertex {
                    point: LatticePoint {
                        x: (x & !LOW_BITS) | tag.bits() | (c as i64 & 1),
                        y: (y & !LOW_BITS) | tag.bits(),
                    },
                    ..Default::default()
                }
            })
            .collect();
        if n == 0 {
            return ring;
        }
        if n % 2 == 1 {
            ring[0].point.y += 1;
        }
        ring.push(ring[0]);

        for c in 0..n {
            let (p, q) = (ring[c].point, ring[c + 1].point);
            ring[c].x_span = Span::ordered(p.x, q.x);
            ring[c].y_span = Span::ordered(p.y, q.y);
            ring[c].winding_delta = 0;
        }
        ring
    }
}

/// Fitted, closed vertex ring plus the scale needed to undo the mapping.
#[derive(Clone, Debug)]
pub struct LatticeRing {
    pub vertices: Vec<LatticeVertex>,
    pub area_scale: f64,
}

impl LatticeRing {
    /// Number of edges (input vertex count).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Fits `points` against the shared bounds of one overlap test.
pub fn fit(
    bounds: &AxisAlignedBox,
    points: &[Point],
    tag: LatticeTag,
) -> Result<LatticeRing, BankError> {
    let scale = LatticeScale::new(bounds)?;
    Ok(LatticeRing {
        vertices: scale.fit(points, tag),
        area_scale: scale.area_factor(),
    })
}
