//! # Build Components
//!
//! The geometry-only slice of the rim and hub records an inventory system
//! keeps, and the request record it submits. Everything here exists to turn
//! "this rim, this hub, laced like so" into a [`BuildSpec`]; identity,
//! provenance and storage stay with the caller.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::components::{Hub, LacingParams, Rim};
//! use spoke_core::calculations::spoke::{solve, BuildSpec};
//! use spoke_core::settings::CalculatorSettings;
//!
//! let rim = Rim { erd: 600.0, drilling_offset: 0.0 };
//! let hub = Hub {
//!     flange_diameter_left: 45.0,
//!     flange_diameter_right: 45.0,
//!     flange_offset_left: 35.0,
//!     flange_offset_right: 35.0,
//!     spoke_hole_diameter: None,
//!     spoke_count: Some(32),
//! };
//! let lacing = LacingParams::uniform(32, 3);
//!
//! let spec = BuildSpec::from_components(&rim, &hub, &lacing, &CalculatorSettings::default())?;
//! assert_eq!(spec.spoke_hole_diameter, 2.6);
//!
//! let result = solve(spec)?;
//! assert_eq!(result.spoke_length_left_rounded, 293.0);
//! # Ok::<(), spoke_core::errors::GeometryError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::spoke::BuildSpec;
use crate::errors::{GeometryError, GeometryResult};
use crate::settings::CalculatorSettings;

/// Rim attributes that enter the spoke calculation (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rim {
    /// Effective rim diameter
    pub erd: f64,

    /// Spoke hole drilling offset; positive favors the drive side
    #[serde(default)]
    pub drilling_offset: f64,
}

/// Hub attributes that enter the spoke calculation (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub flange_diameter_left: f64,
    pub flange_diameter_right: f64,
    pub flange_offset_left: f64,
    pub flange_offset_right: f64,

    /// Flange hole diameter, when measured
    #[serde(default)]
    pub spoke_hole_diameter: Option<f64>,

    /// Number of holes drilled in the hub, when known
    #[serde(default)]
    pub spoke_count: Option<u32>,
}

/// How the wheel will be laced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LacingParams {
    pub spoke_count: u32,
    pub cross_pattern_left: u32,
    pub cross_pattern_right: u32,
}

impl LacingParams {
    /// Same cross pattern on both sides
    pub fn uniform(spoke_count: u32, cross_pattern: u32) -> Self {
        LacingParams {
            spoke_count,
            cross_pattern_left: cross_pattern,
            cross_pattern_right: cross_pattern,
        }
    }
}

impl BuildSpec {
    /// Assemble a spec from rim, hub and lacing selections.
    ///
    /// The hub's spoke hole diameter falls back to the configured default.
    /// A hub drilled for a different number of spokes than the lacing asks
    /// for is rejected with `InvalidSpokeCount`. The returned spec is not
    /// yet validated; [`crate::calculations::spoke::solve`] does that.
    pub fn from_components(
        rim: &Rim,
        hub: &Hub,
        lacing: &LacingParams,
        settings: &CalculatorSettings,
    ) -> GeometryResult<Self> {
        if let Some(drilled) = hub.spoke_count {
            if drilled != lacing.spoke_count {
                return Err(GeometryError::invalid_spoke_count(
                    lacing.spoke_count,
                    format!("Hub is drilled for {} spokes", drilled),
                ));
            }
        }

        Ok(BuildSpec {
            erd: rim.erd,
            rim_offset: rim.drilling_offset,
            flange_diameter_left: hub.flange_diameter_left,
            flange_diameter_right: hub.flange_diameter_right,
            flange_offset_left: hub.flange_offset_left,
            flange_offset_right: hub.flange_offset_right,
            spoke_hole_diameter: hub
                .spoke_hole_diameter
                .unwrap_or(settings.default_spoke_hole_diameter),
            spoke_count: lacing.spoke_count,
            cross_pattern_left: lacing.cross_pattern_left,
            cross_pattern_right: lacing.cross_pattern_right,
        })
    }
}

/// A calculation request as submitted by the calling service.
///
/// Same fields as [`BuildSpec`] but with `rim_offset` and
/// `spoke_hole_diameter` optional; missing or null values are filled from
/// [`CalculatorSettings`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "erd": 602.0,
///   "rim_offset": null,
///   "flange_diameter_left": 45.0,
///   "flange_diameter_right": 57.0,
///   "flange_offset_left": 35.5,
///   "flange_offset_right": 19.5,
///   "spoke_count": 28,
///   "cross_pattern_left": 2,
///   "cross_pattern_right": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub erd: f64,
    #[serde(default)]
    pub rim_offset: Option<f64>,
    pub flange_diameter_left: f64,
    pub flange_diameter_right: f64,
    pub flange_offset_left: f64,
    pub flange_offset_right: f64,
    #[serde(default)]
    pub spoke_hole_diameter: Option<f64>,
    pub spoke_count: u32,
    pub cross_pattern_left: u32,
    pub cross_pattern_right: u32,
}

impl BuildRequest {
    /// Fill optional fields from `settings`.
    pub fn resolve(&self, settings: &CalculatorSettings) -> BuildSpec {
        BuildSpec {
            erd: self.erd,
            rim_offset: self.rim_offset.unwrap_or(settings.default_rim_offset),
            flange_diameter_left: self.flange_diameter_left,
            flange_diameter_right: self.flange_diameter_right,
            flange_offset_left: self.flange_offset_left,
            flange_offset_right: self.flange_offset_right,
            spoke_hole_diameter: self
                .spoke_hole_diameter
                .unwrap_or(settings.default_spoke_hole_diameter),
            spoke_count: self.spoke_count,
            cross_pattern_left: self.cross_pattern_left,
            cross_pattern_right: self.cross_pattern_right,
        }
    }
}

impl From<BuildSpec> for BuildRequest {
    fn from(spec: BuildSpec) -> Self {
        BuildRequest {
            erd: spec.erd,
            rim_offset: Some(spec.rim_offset),
            flange_diameter_left: spec.flange_diameter_left,
            flange_diameter_right: spec.flange_diameter_right,
            flange_offset_left: spec.flange_offset_left,
            flange_offset_right: spec.flange_offset_right,
            spoke_hole_diameter: Some(spec.spoke_hole_diameter),
            spoke_count: spec.spoke_count,
            cross_pattern_left: spec.cross_pattern_left,
            cross_pattern_right: spec.cross_pattern_right,
        }
    }
}
