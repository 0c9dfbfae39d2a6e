//! Crossing, winding and line-integral bookkeeping on fitted rings.
//!
//! The intersection area is accumulated as a Green's-theorem line integral
//! `Σ w·(t.x - f.x)·(t.y + f.y)/2` over the boundary pieces of the
//! intersection, where `w` is the winding number of the other polygon around
//! the piece. Pieces come from two sources: half edges cut at a crossing
//! (`cross`) and whole edges walked with a running winding number
//! (`inness`).

use super::lattice::{LatticePoint, LatticeVertex};

/// Twice the signed area of triangle `anchor, p, q` in exact integer
/// arithmetic. Positive when `anchor` lies left of the directed edge `p→q`.
#[inline]
pub fn area(anchor: LatticePoint, p: LatticePoint, q: LatticePoint) -> i64 {
    p.x * q.y - p.y * q.x + anchor.x * (p.y - q.y) + anchor.y * (q.x - p.x)
}

/// Adds the line-integral term of the directed segment `from→to` weighted by
/// winding number `w`.
#[inline]
pub fn contribution(acc: &mut i64, from: LatticePoint, to: LatticePoint, w: i32) {
    *acc += i64::from(w) * (to.x - from.x) * (to.y + from.y) / 2;
}

#[inline]
fn lerp_point(a: LatticePoint, b: LatticePoint, r: f64) -> LatticePoint {
    LatticePoint {
        x: (a.x as f64 + r * (b.x - a.x) as f64) as i64,
        y: (a.y as f64 + r * (b.y - a.y) as f64) as i64,
    }
}

#[inline]
fn ratio(num: i64, other: i64) -> f64 {
    let den = num as f64 + other as f64;
    if den == 0.0 {
        0.0
    } else {
        num as f64 / den
    }
}

/// Edges `first[i]→first[i+1]` and `second[k]→second[k+1]` cross. Adds the
/// half edge of `first` after the crossing and the half edge of `second`
/// before it, then records the winding change on both start vertices.
///
/// `a1, a2` locate the crossing along `first`, `a3, a4` along `second`.
#[allow(clippy::too_many_arguments)]
pub fn cross(
    acc: &mut i64,
    first: &mut [LatticeVertex],
    i: usize,
    second: &mut [LatticeVertex],
    k: usize,
    a1: i64,
    a2: i64,
    a3: i64,
    a4: i64,
) {
    let (a, b) = (first[i].point, first[i + 1].point);
    let (c, d) = (second[k].point, second[k + 1].point);

    let p = lerp_point(a, b, ratio(a1, a2));
    contribution(acc, p, b, 1);
    let q = lerp_point(c, d, ratio(a3, a4));
    contribution(acc, d, q, 1);

    first[i].winding_delta += 1;
    second[k].winding_delta -= 1;
}

/// Winding number of `p` with respect to the closed ring `ring`, from a
/// vertical ray test against every edge whose x-span strictly contains `p.x`.
pub fn winding_of(p: LatticePoint, ring: &[LatticeVertex]) -> i32 {
    let edges = ring.len().saturating_sub(1);
    let mut w = 0;
    for c in 0..edges {
        let (s, e) = (ring[c].point, ring[c + 1].point);
        if ring[c].x_span.contains_open(p.x) {
            let left = area(p, s, e) > 0;
            let rightward = s.x < e.x;
            // Only rightward edges with p on their left, or leftward edges
            // with p on their right, wind around p.
            if left == rightward {
                w += if left { -1 } else { 1 };
            }
        }
    }
    w
}

/// Adds the contributions of `subject`'s edges that lie inside `other`,
/// starting from the winding of `subject[0]` and updating it with the deltas
/// recorded at each crossing.
pub fn inness(acc: &mut i64, subject: &[LatticeVertex], other: &[LatticeVertex]) {
    let Some(first) = subject.first() else {
        return;
    };
    let mut w = winding_of(first.point, other);
    let edges = subject.len().saturating_sub(1);
    for j in 0..edges {
        if w != 0 {
            contribution(acc, subject[j].point, subject[j + 1].point, w);
        }
        w += subject[j].winding_delta;
    }
}

/// Finds every crossing between the edges of `a` and `b` and feeds it to
/// [`cross`], using the span pre-filter to skip edge pairs whose bounding
/// boxes do not meet.
pub fn accumulate_crossings(acc: &mut i64, a: &mut [LatticeVertex], b: &mut [LatticeVertex]) {
    let na = a.len().saturating_sub(1);
    let nb = b.len().saturating_sub(1);
    for j in 0..na {
        for k in 0..nb {
            if !(a[j].x_span.overlaps(b[k].x_span) && a[j].y_span.overlaps(b[k].y_span)) {
                continue;
            }
            let a1 = -area(a[j].point, b[k].point, b[k + 1].point);
            let a2 = area(a[j + 1].point, b[k].point, b[k + 1].point);
            let o = a1 < 0;
            if o != (a2 < 0) {
                continue;
            }
            let a3 = area(b[k].point, a[j].point, a[j + 1].point);
            let a4 = -area(b[k + 1].point, a[j].point, a[j + 1].point);
            if (a3 < 0) != (a4 < 0) {
                continue;
            }
            if o {
                cross(acc, a, j, b, k, a1, a2, a3, a4);
            } else {
                cross(acc, b, k, a, j, a3, a4, a1, a2);
            }
        }
    }
}
