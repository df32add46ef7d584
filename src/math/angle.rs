use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Point2, Vector2};

/// Wraps an angle into `[0, 2π)`.
#[must_use]
pub fn normalized(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

/// Unit vector at `angle` (standard position: radians counter-clockwise
/// from the positive x-axis).
#[must_use]
pub fn unit_vector(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Angle of the right-hand normal of the chord `a → b`.
///
/// The normal is the chord direction rotated by `-π/2`, so for an edge
/// walked counter-clockwise around a region it points out of the region.
/// Returns the angle wrapped into `[0, 2π)`.
#[must_use]
pub fn chord_normal(a: Point2, b: Point2) -> f64 {
    let heading = (b.y - a.y).atan2(b.x - a.x);
    normalized(heading - FRAC_PI_2)
}

/// Reverses an angle by half a turn, keeping it in `[0, 2π)`.
#[must_use]
pub fn opposite(angle: f64) -> f64 {
    normalized(angle + PI)
}
