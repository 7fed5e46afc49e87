//! # Spoke Length Calculation
//!
//! Computes the spoke length for each side of a wheel plus the angles a
//! builder uses to judge the build: bracing, wrap, total and theta angle,
//! and the split of tension between the two flanges.
//!
//! ## Assumptions
//!
//! - Spokes are evenly split between the two flanges (`spoke_count / 2` each)
//! - Every spoke on one side uses that side's cross pattern
//! - The nipple seat lies on the ERD circle; the spoke hole diameter is
//!   compensated by half its width
//! - Positive `rim_offset` favors the drive side (see [`crate::equations`])
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::calculations::spoke::{solve, BuildSpec};
//!
//! let spec = BuildSpec {
//!     erd: 600.0,
//!     rim_offset: 0.0,
//!     flange_diameter_left: 45.0,
//!     flange_diameter_right: 45.0,
//!     flange_offset_left: 35.0,
//!     flange_offset_right: 35.0,
//!     spoke_hole_diameter: 2.6,
//!     spoke_count: 32,
//!     cross_pattern_left: 3,
//!     cross_pattern_right: 3,
//! };
//!
//! let result = solve(spec).unwrap();
//!
//! assert_eq!(result.spoke_length_left, result.spoke_length_right);
//! assert_eq!(result.spoke_length_left_rounded, 293.0);
//! assert_eq!(result.tension_percent_left, 50.0);
//! println!("Bracing: {:.1} deg", result.bracing_angle_left);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::Side;
use crate::equations::{
    axial_separation, bracing_angle, hole_to_hole_distance, lacing_angle, nipple_compensation,
    planar_distance_squared,
};
use crate::errors::{GeometryError, GeometryResult};
use crate::rounding::round_to_half_mm;
use crate::settings::DEFAULT_SPOKE_HOLE_DIAMETER;
use crate::units::Degrees;

/// Smallest spoke count that gives each flange at least two holes
pub const MIN_SPOKE_COUNT: u32 = 4;

/// Largest magnitude accepted for any length input (mm)
pub const MAX_DIMENSION_MM: f64 = 10_000.0;

fn default_spoke_hole_diameter() -> f64 {
    DEFAULT_SPOKE_HOLE_DIAMETER
}

/// Input parameters for a wheel build. All lengths in millimeters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "erd": 600.0,
///   "rim_offset": 0.0,
///   "flange_diameter_left": 45.0,
///   "flange_diameter_right": 45.0,
///   "flange_offset_left": 35.0,
///   "flange_offset_right": 35.0,
///   "spoke_hole_diameter": 2.6,
///   "spoke_count": 32,
///   "cross_pattern_left": 3,
///   "cross_pattern_right": 3
/// }
/// ```
///
/// `rim_offset` defaults to 0 and `spoke_hole_diameter` to 2.6 when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildSpec {
    /// Effective rim diameter at the nipple seat
    pub erd: f64,

    /// Rim drilling offset; positive favors the drive (right) side
    #[serde(default)]
    pub rim_offset: f64,

    /// Left flange pitch circle diameter
    pub flange_diameter_left: f64,

    /// Right flange pitch circle diameter
    pub flange_diameter_right: f64,

    /// Hub center-plane to left flange
    pub flange_offset_left: f64,

    /// Hub center-plane to right flange
    pub flange_offset_right: f64,

    /// Nipple/washer compensation diameter
    #[serde(default = "default_spoke_hole_diameter")]
    pub spoke_hole_diameter: f64,

    /// Total spokes on the wheel
    pub spoke_count: u32,

    /// Left cross number (0 = radial)
    pub cross_pattern_left: u32,

    /// Right cross number (0 = radial)
    pub cross_pattern_right: u32,
}

impl BuildSpec {
    /// Validate input parameters.
    ///
    /// Checks run in a fixed order: dimensions, rim clearance over each
    /// flange, spoke count, then cross patterns, so a spec with several
    /// problems always reports the same one. Lengths must be finite and no
    /// larger than [`MAX_DIMENSION_MM`].
    pub fn validate(&self) -> GeometryResult<()> {
        check_positive("erd", self.erd, "ERD must be positive")?;
        check_finite("rim_offset", self.rim_offset, "Rim offset must be a finite number")?;
        check_positive(
            "flange_diameter_left",
            self.flange_diameter_left,
            "Left flange diameter must be positive",
        )?;
        check_positive(
            "flange_diameter_right",
            self.flange_diameter_right,
            "Right flange diameter must be positive",
        )?;
        check_non_negative(
            "flange_offset_left",
            self.flange_offset_left,
            "Left flange offset cannot be negative",
        )?;
        check_non_negative(
            "flange_offset_right",
            self.flange_offset_right,
            "Right flange offset cannot be negative",
        )?;
        check_non_negative(
            "spoke_hole_diameter",
            self.spoke_hole_diameter,
            "Spoke hole diameter cannot be negative",
        )?;

        // Hole-to-hole distance is at least (erd - flange_diameter) / 2, so
        // this keeps every spoke length positive.
        for side in Side::BOTH {
            let flange = self.flange(side);
            if self.erd - flange.diameter <= self.spoke_hole_diameter {
                return Err(GeometryError::invalid_dimension(
                    "erd",
                    self.erd,
                    format!(
                        "ERD must exceed the {} flange diameter ({}) plus the spoke hole diameter ({})",
                        side, flange.diameter, self.spoke_hole_diameter
                    ),
                ));
            }
        }

        if self.spoke_count == 0 {
            return Err(GeometryError::invalid_spoke_count(
                self.spoke_count,
                "Spoke count must be positive",
            ));
        }
        if self.spoke_count % 2 != 0 {
            return Err(GeometryError::invalid_spoke_count(
                self.spoke_count,
                "Spoke count must be even so both flanges get the same number of spokes",
            ));
        }
        if self.spoke_count < MIN_SPOKE_COUNT {
            return Err(GeometryError::invalid_spoke_count(
                self.spoke_count,
                format!("Spoke count must be at least {}", MIN_SPOKE_COUNT),
            ));
        }

        let holes = self.spokes_per_side();
        for side in Side::BOTH {
            let cross = self.flange(side).cross_pattern;
            if cross >= holes {
                return Err(GeometryError::invalid_cross_pattern(side, cross, holes));
            }
        }
        Ok(())
    }

    /// Spokes (and flange holes) per side
    pub fn spokes_per_side(&self) -> u32 {
        self.spoke_count / 2
    }

    /// Flange diameter, offset and cross pattern for one side
    pub fn flange(&self, side: Side) -> FlangeSide {
        match side {
            Side::Left => FlangeSide {
                diameter: self.flange_diameter_left,
                offset: self.flange_offset_left,
                cross_pattern: self.cross_pattern_left,
            },
            Side::Right => FlangeSide {
                diameter: self.flange_diameter_right,
                offset: self.flange_offset_right,
                cross_pattern: self.cross_pattern_right,
            },
        }
    }

    /// True when both sides see identical geometry (centered rim, mirror hub)
    pub fn is_symmetric(&self) -> bool {
        self.rim_offset == 0.0
            && self.flange_diameter_left == self.flange_diameter_right
            && self.flange_offset_left == self.flange_offset_right
            && self.cross_pattern_left == self.cross_pattern_right
    }
}

fn check_finite(field: &str, value: f64, reason: &str) -> GeometryResult<()> {
    if !value.is_finite() || value.abs() > MAX_DIMENSION_MM {
        return Err(GeometryError::invalid_dimension(field, value, reason));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64, reason: &str) -> GeometryResult<()> {
    check_finite(field, value, reason)?;
    if value <= 0.0 {
        return Err(GeometryError::invalid_dimension(field, value, reason));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64, reason: &str) -> GeometryResult<()> {
    check_finite(field, value, reason)?;
    if value < 0.0 {
        return Err(GeometryError::invalid_dimension(field, value, reason));
    }
    Ok(())
}

/// Flange parameters for one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlangeSide {
    /// Pitch circle diameter (mm)
    pub diameter: f64,
    /// Hub center-plane to flange (mm)
    pub offset: f64,
    /// Cross number
    pub cross_pattern: u32,
}

/// The full spoke triangle for one side.
///
/// Kept separate from [`SpokeResult`] so the intermediate quantities can be
/// inspected and the triangle identities checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideGeometry {
    pub side: Side,

    /// Flange radius r1 (mm)
    pub flange_radius: f64,

    /// Rim radius r2 (mm)
    pub rim_radius: f64,

    /// Axial separation d between flange plane and nipple hole plane (mm)
    pub axial_separation: f64,

    /// Hole-to-hole distance projected onto the wheel plane (mm)
    pub planar_distance: f64,

    /// Straight hole-to-hole distance before nipple compensation (mm)
    pub hole_to_hole: f64,

    /// Exact spoke length after nipple compensation (mm)
    pub spoke_length: f64,

    /// Spoke to wheel center-plane (deg)
    pub bracing_angle: f64,

    /// Lacing angle between flange hole and nipple hole (deg)
    pub wrap_angle: f64,

    /// Twice the wrap angle (deg)
    pub total_angle: f64,

    /// Complement of the bracing angle (deg)
    pub theta_angle: f64,
}

impl SideGeometry {
    /// Name of the first NaN/infinite quantity, if any
    fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("spoke_length", self.spoke_length),
            ("bracing_angle", self.bracing_angle),
            ("wrap_angle", self.wrap_angle),
            ("total_angle", self.total_angle),
            ("theta_angle", self.theta_angle),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

/// Results from spoke calculation. Lengths in mm, angles in degrees.
///
/// ## JSON Example
///
/// ```json
/// {
///   "spoke_length_left": 292.919,
///   "spoke_length_right": 292.919,
///   "spoke_length_left_rounded": 293.0,
///   "spoke_length_right_rounded": 293.0,
///   "tension_percent_left": 50.0,
///   "tension_percent_right": 50.0,
///   "bracing_angle_left": 6.83,
///   "bracing_angle_right": 6.83,
///   "wrap_angle_left": 67.5,
///   "wrap_angle_right": 67.5,
///   "total_angle_left": 135.0,
///   "total_angle_right": 135.0,
///   "theta_angle_left": 83.17,
///   "theta_angle_right": 83.17
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpokeResult {
    pub spoke_length_left: f64,
    pub spoke_length_right: f64,
    pub spoke_length_left_rounded: f64,
    pub spoke_length_right_rounded: f64,
    pub tension_percent_left: f64,
    pub tension_percent_right: f64,
    pub bracing_angle_left: f64,
    pub bracing_angle_right: f64,
    pub wrap_angle_left: f64,
    pub wrap_angle_right: f64,
    pub total_angle_left: f64,
    pub total_angle_right: f64,
    pub theta_angle_left: f64,
    pub theta_angle_right: f64,
}

/// One side's slice of a [`SpokeResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideSummary {
    pub side: Side,
    pub spoke_length: f64,
    pub spoke_length_rounded: f64,
    pub tension_percent: f64,
    pub bracing_angle: f64,
    pub wrap_angle: f64,
    pub total_angle: f64,
    pub theta_angle: f64,
}

impl SpokeResult {
    /// View one side's fields
    pub fn side(&self, side: Side) -> SideSummary {
        match side {
            Side::Left => SideSummary {
                side,
                spoke_length: self.spoke_length_left,
                spoke_length_rounded: self.spoke_length_left_rounded,
                tension_percent: self.tension_percent_left,
                bracing_angle: self.bracing_angle_left,
                wrap_angle: self.wrap_angle_left,
                total_angle: self.total_angle_left,
                theta_angle: self.theta_angle_left,
            },
            Side::Right => SideSummary {
                side,
                spoke_length: self.spoke_length_right,
                spoke_length_rounded: self.spoke_length_right_rounded,
                tension_percent: self.tension_percent_right,
                bracing_angle: self.bracing_angle_right,
                wrap_angle: self.wrap_angle_right,
                total_angle: self.total_angle_right,
                theta_angle: self.theta_angle_right,
            },
        }
    }

    /// Right minus left exact length (mm)
    pub fn length_difference(&self) -> f64 {
        self.spoke_length_right - self.spoke_length_left
    }
}

/// Compute the spoke triangle for one side.
///
/// Does not validate; call [`BuildSpec::validate`] first or use [`solve`].
pub fn solve_side(spec: &BuildSpec, side: Side) -> SideGeometry {
    let flange = spec.flange(side);

    let r1 = flange.diameter / 2.0;
    let r2 = spec.erd / 2.0;
    let phi = lacing_angle(flange.cross_pattern, spec.spoke_count);
    let d = axial_separation(side, flange.offset, spec.rim_offset);

    let planar_sq = planar_distance_squared(r1, r2, phi);
    let hole_to_hole = hole_to_hole_distance(planar_sq, d);
    let spoke_length = hole_to_hole - nipple_compensation(spec.spoke_hole_diameter);

    let bracing = Degrees::from(bracing_angle(d, hole_to_hole)).0;
    let wrap = Degrees::from(phi).0;

    SideGeometry {
        side,
        flange_radius: r1,
        rim_radius: r2,
        axial_separation: d,
        planar_distance: planar_sq.sqrt(),
        hole_to_hole,
        spoke_length,
        bracing_angle: bracing,
        wrap_angle: wrap,
        total_angle: 2.0 * wrap,
        theta_angle: 90.0 - bracing,
    }
}

/// Split radial tension between the sides as percentages summing to 100.
///
/// Each side's raw share is `|sin(bracing_angle)|`, so the side with the
/// larger bracing angle takes the larger share. When neither side has any
/// axial separation both shares are zero and the split is even.
pub fn tension_split(left: &SideGeometry, right: &SideGeometry) -> (f64, f64) {
    let share_left = left.bracing_angle.to_radians().sin().abs();
    let share_right = right.bracing_angle.to_radians().sin().abs();
    let total = share_left + share_right;

    if total == 0.0 {
        return (50.0, 50.0);
    }

    let left_pct = 100.0 * (share_left / total);
    (left_pct, 100.0 - left_pct)
}

/// Calculate spoke lengths and build angles for both sides.
///
/// # Arguments
///
/// * `spec` - Rim, hub and lacing parameters
///
/// # Returns
///
/// * `Ok(SpokeResult)` - Exact and rounded lengths, angles, tension split
/// * `Err(GeometryError)` - Invalid input, or a degenerate triangle
///   (`NonFiniteResult`)
pub fn solve(spec: BuildSpec) -> GeometryResult<SpokeResult> {
    if let Err(err) = spec.validate() {
        warn!(code = err.error_code(), %err, "rejected build spec");
        return Err(err);
    }

    debug!(
        erd = spec.erd,
        rim_offset = spec.rim_offset,
        spoke_count = spec.spoke_count,
        cross_left = spec.cross_pattern_left,
        cross_right = spec.cross_pattern_right,
        "solving spoke lengths"
    );

    let left = solve_side(&spec, Side::Left);
    let right = solve_side(&spec, Side::Right);

    for geometry in [&left, &right] {
        if let Some(quantity) = geometry.first_non_finite() {
            error!(
                side = %geometry.side,
                quantity,
                ?spec,
                "degenerate spoke triangle produced a non-finite result"
            );
            return Err(GeometryError::non_finite(geometry.side, quantity));
        }
    }

    let (tension_percent_left, tension_percent_right) = tension_split(&left, &right);

    let result = SpokeResult {
        spoke_length_left: left.spoke_length,
        spoke_length_right: right.spoke_length,
        spoke_length_left_rounded: round_to_half_mm(left.spoke_length),
        spoke_length_right_rounded: round_to_half_mm(right.spoke_length),
        tension_percent_left,
        tension_percent_right,
        bracing_angle_left: left.bracing_angle,
        bracing_angle_right: right.bracing_angle,
        wrap_angle_left: left.wrap_angle,
        wrap_angle_right: right.wrap_angle,
        total_angle_left: left.total_angle,
        total_angle_right: right.total_angle,
        theta_angle_left: left.theta_angle,
        theta_angle_right: right.theta_angle,
    };

    debug!(
        left_mm = result.spoke_length_left,
        right_mm = result.spoke_length_right,
        tension_left = result.tension_percent_left,
        "spoke lengths solved"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    /// Symmetric 32-spoke front wheel, 3-cross
    fn test_spec() -> BuildSpec {
        BuildSpec {
            erd: 600.0,
            rim_offset: 0.0,
            flange_diameter_left: 45.0,
            flange_diameter_right: 45.0,
            flange_offset_left: 35.0,
            flange_offset_right: 35.0,
            spoke_hole_diameter: 2.6,
            spoke_count: 32,
            cross_pattern_left: 3,
            cross_pattern_right: 3,
        }
    }

    /// Dished rear wheel: drive flange closer to center, offset rim
    fn rear_spec() -> BuildSpec {
        BuildSpec {
            flange_offset_right: 20.0,
            rim_offset: 3.0,
            ..test_spec()
        }
    }

    #[test]
    fn test_symmetric_wheel() {
        let result = solve(test_spec()).unwrap();

        // h = sqrt(22.5² + 300² - 2·22.5·300·cos 67.5° + 35²) = 294.2193
        assert!(approx_eq(result.spoke_length_left, 292.919346), "L = {}", result.spoke_length_left);
        assert_eq!(result.spoke_length_left, result.spoke_length_right);
        assert_eq!(result.spoke_length_left_rounded, 293.0);
        assert_eq!(result.tension_percent_left, 50.0);
        assert_eq!(result.tension_percent_right, 50.0);
        assert!(approx_eq(result.bracing_angle_left, 6.832020), "β = {}", result.bracing_angle_left);
        assert_eq!(result.bracing_angle_left, result.bracing_angle_right);
        assert!(approx_eq(result.wrap_angle_left, 67.5));
        assert!(approx_eq(result.total_angle_left, 135.0));
        assert!(approx_eq(result.theta_angle_left, 90.0 - 6.832020));
    }

    #[test]
    fn test_rear_wheel_with_offset_rim() {
        let result = solve(rear_spec()).unwrap();

        // d_left = 35 - 3 = 32, d_right = 20 + 3 = 23
        assert!(approx_eq(result.spoke_length_left, 292.577566), "L = {}", result.spoke_length_left);
        assert!(approx_eq(result.spoke_length_right, 291.734168), "R = {}", result.spoke_length_right);
        assert!(approx_eq(result.bracing_angle_left, 6.251269));
        assert!(approx_eq(result.bracing_angle_right, 4.501727));

        // Larger bracing angle, larger share
        assert!(approx_eq(result.tension_percent_left, 58.111875), "T = {}", result.tension_percent_left);
        assert!(result.tension_percent_left > result.tension_percent_right);
    }

    #[test]
    fn test_rim_offset_sign_convention() {
        // Positive offset shortens left separation and lengthens right
        let base = solve_side(&test_spec(), Side::Left);
        let shifted = BuildSpec { rim_offset: 3.0, ..test_spec() };
        let left = solve_side(&shifted, Side::Left);
        let right = solve_side(&shifted, Side::Right);

        assert!(approx_eq(left.axial_separation, 32.0));
        assert!(approx_eq(right.axial_separation, 38.0));
        assert!(left.spoke_length < base.spoke_length);
        assert!(right.spoke_length > base.spoke_length);
        assert!(approx_eq(right.spoke_length, 293.291282), "R = {}", right.spoke_length);
    }

    #[test]
    fn test_negative_rim_offset_mirrors() {
        let plus = BuildSpec { rim_offset: 3.0, ..test_spec() };
        let minus = BuildSpec { rim_offset: -3.0, ..test_spec() };
        let plus_result = solve(plus).unwrap();
        let minus_result = solve(minus).unwrap();

        assert!(approx_eq(plus_result.spoke_length_left, minus_result.spoke_length_right));
        assert!(approx_eq(plus_result.spoke_length_right, minus_result.spoke_length_left));
    }

    #[test]
    fn test_radial_lacing_matches_pythagoras() {
        let spec = BuildSpec {
            cross_pattern_left: 0,
            cross_pattern_right: 0,
            ..test_spec()
        };
        let result = solve(spec).unwrap();

        let expected = ((22.5f64 - 300.0).powi(2) + 35.0f64.powi(2)).sqrt() - 1.3;
        assert!(approx_eq(result.spoke_length_left, expected), "L = {}", result.spoke_length_left);
        assert!(approx_eq(result.spoke_length_left, 278.398498));
        assert_eq!(result.wrap_angle_left, 0.0);
        assert_eq!(result.total_angle_left, 0.0);
    }

    #[test]
    fn test_mixed_lacing_per_side() {
        // Radial left, 2-cross right
        let spec = BuildSpec {
            cross_pattern_left: 0,
            cross_pattern_right: 2,
            ..test_spec()
        };
        let result = solve(spec).unwrap();
        assert_eq!(result.wrap_angle_left, 0.0);
        assert!(approx_eq(result.wrap_angle_right, 45.0));
        assert!(result.spoke_length_right > result.spoke_length_left);
    }

    #[test]
    fn test_triangle_identities() {
        for side in Side::BOTH {
            let g = solve_side(&rear_spec(), side);
            assert!(approx_eq(g.bracing_angle.to_radians().sin() * g.hole_to_hole, g.axial_separation));
            assert!(approx_eq(g.bracing_angle + g.theta_angle, 90.0));
            assert_eq!(g.total_angle, 2.0 * g.wrap_angle);
            assert!(approx_eq(g.hole_to_hole - g.spoke_length, 1.3));
        }
    }

    #[test]
    fn test_zero_offsets_split_evenly() {
        let spec = BuildSpec {
            flange_offset_left: 0.0,
            flange_offset_right: 0.0,
            ..test_spec()
        };
        let result = solve(spec).unwrap();
        assert_eq!(result.bracing_angle_left, 0.0);
        assert_eq!(result.tension_percent_left, 50.0);
        assert_eq!(result.tension_percent_right, 50.0);
    }

    #[test]
    fn test_zero_spoke_hole_diameter() {
        let spec = BuildSpec { spoke_hole_diameter: 0.0, ..test_spec() };
        let left = solve_side(&spec, Side::Left);
        assert_eq!(left.spoke_length, left.hole_to_hole);
    }

    #[test]
    fn test_degenerate_triangle_is_non_finite() {
        // Flange radius equals rim radius, no offset, radial: zero-length
        // triangle. Validation refuses this, so exercise the side directly.
        let spec = BuildSpec {
            erd: 45.0,
            flange_offset_left: 0.0,
            flange_offset_right: 0.0,
            cross_pattern_left: 0,
            cross_pattern_right: 0,
            ..test_spec()
        };
        let left = solve_side(&spec, Side::Left);
        assert!(left.bracing_angle.is_nan());
        assert_eq!(left.first_non_finite(), Some("bracing_angle"));
        assert!(!GeometryError::non_finite(Side::Left, "bracing_angle").is_input_error());
    }

    #[test]
    fn test_flange_reaching_rim_rejected() {
        // Would give a -1.05 mm spoke if solved
        let spec = BuildSpec {
            erd: 45.5,
            flange_offset_left: 0.0,
            flange_offset_right: 0.0,
            cross_pattern_left: 0,
            cross_pattern_right: 0,
            ..test_spec()
        };
        let err = solve(spec).unwrap_err();
        assert!(
            matches!(&err, GeometryError::InvalidDimension { field, .. } if field == "erd"),
            "{:?}",
            err
        );
        assert!(err.to_string().contains("left flange diameter"), "{}", err);
    }

    #[test]
    fn test_rim_clearance_boundary() {
        // Only the right flange is too large
        let spec = BuildSpec {
            flange_diameter_right: 600.0,
            ..test_spec()
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("right flange diameter"), "{}", err);

        // Clearance exactly equal to the spoke hole is still refused
        let spec = BuildSpec {
            erd: 48.0,
            spoke_hole_diameter: 3.0,
            ..test_spec()
        };
        assert!(spec.validate().is_err());

        // Any clearance beyond it gives a positive length
        let spec = BuildSpec {
            erd: 48.0,
            flange_offset_left: 0.0,
            flange_offset_right: 0.0,
            cross_pattern_left: 0,
            cross_pattern_right: 0,
            ..test_spec()
        };
        let result = solve(spec).unwrap();
        assert!(result.spoke_length_left > 0.0, "L = {}", result.spoke_length_left);
        assert!(result.spoke_length_left_rounded >= 0.0);
    }

    #[test]
    fn test_huge_dimension_is_input_error() {
        let err = solve(BuildSpec { erd: 1e200, ..test_spec() }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
        assert!(err.is_input_error());

        let err = solve(BuildSpec { rim_offset: -1e200, ..test_spec() }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");

        let spec = BuildSpec { erd: MAX_DIMENSION_MM, ..test_spec() };
        assert!(solve(spec).is_ok());
    }

    #[test]
    fn test_rim_offset_past_flange() {
        // Nipple holes sit beyond the left flange: left separation goes negative
        let spec = BuildSpec {
            flange_offset_left: 0.0,
            flange_offset_right: 10.0,
            rim_offset: 8.0,
            ..test_spec()
        };
        let left = solve_side(&spec, Side::Left);
        assert!(approx_eq(left.axial_separation, -8.0));
        assert!(approx_eq(left.bracing_angle.to_radians().sin() * left.hole_to_hole, -8.0));

        let result = solve(spec).unwrap();
        assert!(approx_eq(result.bracing_angle_left, -1.568656), "β = {}", result.bracing_angle_left);
        assert!(approx_eq(result.bracing_angle_right, 3.525900), "β = {}", result.bracing_angle_right);
        assert!(approx_eq(result.theta_angle_left, 91.568656));
        assert!(approx_eq(result.theta_angle_left, 90.0 - result.bracing_angle_left));

        // Shares use |sin β|, so the leaning side still carries tension
        assert!(approx_eq(result.tension_percent_left, 30.801616), "T = {}", result.tension_percent_left);
        assert!(approx_eq(result.tension_percent_right, 69.198384));
        assert!(approx_eq(result.spoke_length_left, 290.939668));
    }

    #[test]
    fn test_odd_spoke_count() {
        let spec = BuildSpec { spoke_count: 31, ..test_spec() };
        let err = solve(spec).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SPOKE_COUNT");
    }

    #[test]
    fn test_small_spoke_counts() {
        for count in [0, 2] {
            let spec = BuildSpec {
                spoke_count: count,
                cross_pattern_left: 0,
                cross_pattern_right: 0,
                ..test_spec()
            };
            assert!(
                matches!(spec.validate(), Err(GeometryError::InvalidSpokeCount { .. })),
                "spoke_count = {}",
                count
            );
        }
    }

    #[test]
    fn test_cross_pattern_too_large() {
        let spec = BuildSpec { cross_pattern_left: 20, ..test_spec() };
        let err = solve(spec).unwrap_err();
        assert_eq!(err, GeometryError::invalid_cross_pattern(Side::Left, 20, 16));

        // 16 holes per side: 16 crosses would wrap the whole flange
        let spec = BuildSpec { cross_pattern_right: 16, ..test_spec() };
        assert_eq!(
            spec.validate().unwrap_err(),
            GeometryError::invalid_cross_pattern(Side::Right, 16, 16)
        );

        let spec = BuildSpec { cross_pattern_right: 15, ..test_spec() };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        let cases = [
            BuildSpec { erd: 0.0, ..test_spec() },
            BuildSpec { erd: -600.0, ..test_spec() },
            BuildSpec { erd: f64::NAN, ..test_spec() },
            BuildSpec { rim_offset: f64::INFINITY, ..test_spec() },
            BuildSpec { flange_diameter_left: 0.0, ..test_spec() },
            BuildSpec { flange_diameter_right: -45.0, ..test_spec() },
            BuildSpec { flange_offset_left: -1.0, ..test_spec() },
            BuildSpec { flange_offset_right: f64::NAN, ..test_spec() },
            BuildSpec { spoke_hole_diameter: -0.1, ..test_spec() },
            BuildSpec { flange_offset_right: MAX_DIMENSION_MM + 1.0, ..test_spec() },
            BuildSpec { erd: 40.0, ..test_spec() },
        ];
        for spec in cases {
            assert!(
                matches!(solve(spec), Err(GeometryError::InvalidDimension { .. })),
                "{:?}",
                spec
            );
        }
    }

    #[test]
    fn test_erd_error_message() {
        let err = solve(BuildSpec { erd: 0.0, ..test_spec() }).unwrap_err();
        assert!(err.to_string().contains("ERD must be positive"));
    }

    #[test]
    fn test_dimension_checked_before_spoke_count() {
        let spec = BuildSpec {
            erd: -1.0,
            spoke_count: 31,
            ..test_spec()
        };
        assert_eq!(spec.validate().unwrap_err().error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_is_symmetric() {
        assert!(test_spec().is_symmetric());
        assert!(!rear_spec().is_symmetric());
    }

    #[test]
    fn test_spec_defaults_from_json() {
        let json = r#"{
            "erd": 600.0,
            "flange_diameter_left": 45.0,
            "flange_diameter_right": 45.0,
            "flange_offset_left": 35.0,
            "flange_offset_right": 35.0,
            "spoke_count": 32,
            "cross_pattern_left": 3,
            "cross_pattern_right": 3
        }"#;
        let spec: BuildSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, test_spec());
    }

    #[test]
    fn test_result_serialization() {
        let result = solve(test_spec()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("spoke_length_left_rounded"));
        assert!(json.contains("tension_percent_right"));
        assert!(json.contains("theta_angle_left"));

        let roundtrip: SpokeResult = serde_json::from_str(&json).unwrap();
        assert!((result.spoke_length_left - roundtrip.spoke_length_left).abs() < 0.001);
        assert_eq!(result.spoke_length_left_rounded, roundtrip.spoke_length_left_rounded);
    }

    #[test]
    fn test_side_view() {
        let result = solve(rear_spec()).unwrap();
        let right = result.side(Side::Right);
        assert_eq!(right.spoke_length, result.spoke_length_right);
        assert_eq!(right.tension_percent, result.tension_percent_right);
        assert!(approx_eq(result.length_difference(), 291.734168 - 292.577566));
    }
}
