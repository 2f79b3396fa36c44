//! 2D geometry utilities shared by the primitives and intersection routines.
//!
//! Pure functions over `[f64; 2]` points and plain angles, so they can be
//! reused by the numeric layer without pulling in the value types.

use std::f64::consts::PI;

/// Tolerance for angular comparisons (radians).
pub const ANGLE_TOLERANCE: f64 = 1e-9;

const TAU: f64 = 2.0 * PI;

// =============================================================================
// Point Operations
// =============================================================================

/// Compute squared distance between two 2D points.
#[inline]
pub fn distance_squared(p1: [f64; 2], p2: [f64; 2]) -> f64 {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    dx * dx + dy * dy
}

/// Linear interpolation between two 2D points.
#[inline]
pub fn lerp(p1: [f64; 2], p2: [f64; 2], t: f64) -> [f64; 2] {
    [
        p1[0] + t * (p2[0] - p1[0]),
        p1[1] + t * (p2[1] - p1[1]),
    ]
}

// =============================================================================
// Angle Operations
// =============================================================================

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Test whether `angle` lies on the sweep from `start` to `end`.
///
/// The sweep runs counter-clockwise when `ccw` is true, clockwise otherwise,
/// and wraps through 0 when needed. Equal `start` and `end` mean a full turn.
pub fn is_angle_between(angle: f64, start: f64, end: f64, ccw: bool) -> bool {
    let (from, to) = if ccw { (start, end) } else { (end, start) };

    let span = normalize_angle(to - from);
    if span < ANGLE_TOLERANCE || TAU - span < ANGLE_TOLERANCE {
        return true;
    }

    let rel = normalize_angle(angle - from);
    rel <= span + ANGLE_TOLERANCE || TAU - rel < ANGLE_TOLERANCE
}

/// Compute a point on an arc given center, radius, and angle (radians).
#[inline]
pub fn arc_point(center: [f64; 2], radius: f64, angle: f64) -> [f64; 2] {
    [
        center[0] + radius * angle.cos(),
        center[1] + radius * angle.sin(),
    ]
}

// =============================================================================
// Tests
// =============================================================================
