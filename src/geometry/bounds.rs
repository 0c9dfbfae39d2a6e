use super::Point;

/// Axis-aligned bounding box accumulated over polygon vertices.
///
/// Starts empty (`min = +∞`, `max = -∞`); after at least one point has been
/// included `min <= max` holds on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedBox {
    pub min: Point,
    pub max: Point,
}

impl Default for AxisAlignedBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl AxisAlignedBox {
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point]) -> Self {
        let mut b = Self::empty();
        b.include_all(points);
        b
    }

    #[inline]
    pub fn include(&mut self, p: &Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn include_all(&mut self, points: &[Point]) {
        for p in points {
            self.include(p);
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
