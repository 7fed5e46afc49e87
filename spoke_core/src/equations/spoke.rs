//! # Spoke Triangle Formulas
//!
//! A spoke runs in a straight line between two points given in cylindrical
//! coordinates about the hub axle:
//!
//! ```text
//!   flange hole   (r1 = PCD / 2,  angle 0,  axial d from the rim plane)
//!   nipple hole   (r2 = ERD / 2,  angle φ,  axial 0)
//! ```
//!
//! ## Notation
//!
//! - `r1` = Flange radius (half the pitch circle diameter)
//! - `r2` = Rim radius (half the ERD)
//! - `φ` = Lacing angle between flange hole and nipple hole, seen down the axle
//! - `d` = Axial separation between flange plane and nipple hole plane
//! - `p` = Distance between the two holes projected onto the wheel plane
//! - `h` = Hole-to-hole distance, the hypotenuse of the (p, d) right triangle
//!
//! ## References
//!
//! - Law of cosines for `p`, Pythagoras for `h`
//! - Jobst Brandt, *The Bicycle Wheel*, 3rd Edition, spoke length chapter

use std::f64::consts::PI;

use crate::calculations::Side;
use crate::units::Radians;

/// Angle subtended at the axle between a flange hole and the nipple hole its
/// spoke reaches.
///
/// # Formula
/// - φ = cross × 2π / (spoke_count / 2)
///
/// Each cross advances the spoke one flange-hole pitch around the wheel.
/// Radial lacing (cross 0) gives φ = 0 with no special case.
///
/// # Arguments
/// * `cross_pattern` - Cross number for the side
/// * `spoke_count` - Total spokes on the wheel (even, at least 4)
#[inline]
pub fn lacing_angle(cross_pattern: u32, spoke_count: u32) -> Radians {
    let holes_per_side = f64::from(spoke_count / 2);
    Radians(f64::from(cross_pattern) * 2.0 * PI / holes_per_side)
}

/// Axial distance from a flange to the plane of the rim's nipple holes.
///
/// # Formulas
/// - left  (non-drive): d = flange_offset − rim_offset
/// - right (drive):     d = flange_offset + rim_offset
///
/// A positive `rim_offset` is drilling that favors the drive side: the
/// nipple holes sit `rim_offset` toward the left flange, so the right spokes
/// gain separation and the left spokes lose the same amount.
///
/// ```text
///   left flange      nipple holes         right flange
///       |<--- fl - o --->|<----- fr + o ----->|
/// ```
#[inline]
pub fn axial_separation(side: Side, flange_offset: f64, rim_offset: f64) -> f64 {
    match side {
        Side::Left => flange_offset - rim_offset,
        Side::Right => flange_offset + rim_offset,
    }
}

/// Squared hole-to-hole distance projected onto the wheel plane.
///
/// # Formula (law of cosines)
/// - p² = r1² + r2² − 2·r1·r2·cos φ
///
/// Clamped at zero so cancellation when `r1 ≈ r2` and `φ = 0` cannot
/// produce a negative square.
#[inline]
pub fn planar_distance_squared(r1: f64, r2: f64, phi: Radians) -> f64 {
    (r1 * r1 + r2 * r2 - 2.0 * r1 * r2 * phi.0.cos()).max(0.0)
}

/// Straight-line distance between the flange hole and the nipple hole.
///
/// # Formula
/// - h = √(p² + d²)
#[inline]
pub fn hole_to_hole_distance(planar_squared: f64, d: f64) -> f64 {
    (planar_squared + d * d).sqrt()
}

/// Length subtracted from the hole-to-hole distance for the spoke hole.
///
/// # Formula
/// - c = spoke_hole_diameter / 2
#[inline]
pub fn nipple_compensation(spoke_hole_diameter: f64) -> f64 {
    spoke_hole_diameter / 2.0
}

/// Angle between the spoke and the wheel center-plane.
///
/// # Formula
/// - β = asin(d / h)
///
/// Equivalent to `atan(d / p)`, but taken from the hypotenuse so that
/// `sin(β) · h = d` holds to rounding error. A zero-length triangle
/// (`h = 0`) yields NaN rather than a made-up angle.
#[inline]
pub fn bracing_angle(d: f64, hole_to_hole: f64) -> Radians {
    Radians((d / hole_to_hole).clamp(-1.0, 1.0).asin())
}
