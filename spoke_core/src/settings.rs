//! # Calculator Settings
//!
//! Defaults applied when a build request leaves optional fields out. The
//! library never reads files; the CLI loads these from TOML and callers
//! embedding the engine construct them directly.

use serde::{Deserialize, Serialize};

use crate::errors::{GeometryError, GeometryResult};

/// Spoke hole diameter assumed when neither the request nor the hub gives one (mm)
pub const DEFAULT_SPOKE_HOLE_DIAMETER: f64 = 2.6;

/// Defaults for optional build parameters.
///
/// ## TOML Example
///
/// ```toml
/// default_spoke_hole_diameter = 2.6
/// default_rim_offset = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Nipple/washer compensation diameter used when none is given (mm)
    pub default_spoke_hole_diameter: f64,

    /// Rim drilling offset used when none is given (mm)
    pub default_rim_offset: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            default_spoke_hole_diameter: DEFAULT_SPOKE_HOLE_DIAMETER,
            default_rim_offset: 0.0,
        }
    }
}

impl CalculatorSettings {
    /// Validate the defaults with the same rules applied to a build.
    pub fn validate(&self) -> GeometryResult<()> {
        let shd = self.default_spoke_hole_diameter;
        if !shd.is_finite() || shd < 0.0 {
            return Err(GeometryError::invalid_dimension(
                "default_spoke_hole_diameter",
                shd,
                "Spoke hole diameter must be zero or positive",
            ));
        }
        if !self.default_rim_offset.is_finite() {
            return Err(GeometryError::invalid_dimension(
                "default_rim_offset",
                self.default_rim_offset,
                "Rim offset must be a finite number",
            ));
        }
        Ok(())
    }
}
