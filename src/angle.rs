//! Angle utilities used by the nearest-detector lookup.
//!
//! The bank only stores angles in `[-π/4, π/4]`; the helpers here classify
//! and wrap arbitrary query angles so they can be folded onto that band.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Wraps an angle into `[-π, π)`.
#[inline]
pub fn wrap_angle_2pi(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped >= PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Wraps an angle into `[-π/2, π/2)`.
#[inline]
pub fn wrap_angle_half_plane(angle: f64) -> f64 {
    let wrapped = (angle + FRAC_PI_2).rem_euclid(PI) - FRAC_PI_2;
    if wrapped >= FRAC_PI_2 {
        wrapped - PI
    } else {
        wrapped
    }
}

/// True iff `angle` lies in `[-π/4, π/4)` or `[3π/4, 5π/4)` (mod 2π).
#[inline]
pub fn is_small_angle(angle: f64) -> bool {
    let n = ((angle - FRAC_PI_4) / FRAC_PI_2).floor() as i64;
    n.rem_euclid(2) == 1
}

/// True iff `angle` points into the left half plane, `[π/2, 3π/2)` (mod 2π).
#[inline]
pub fn is_angle_leftward(angle: f64) -> bool {
    let n = ((angle - FRAC_PI_2) / PI).floor() as i64;
    n.rem_euclid(2) == 0
}
