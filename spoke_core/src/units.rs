//! # Unit Types
//!
//! Lightweight wrappers for the angle units used by the formula layer.
//! Lengths are plain `f64` millimeters throughout; angles are the quantity
//! that is easy to mix up, since the trigonometry works in radians and every
//! reported angle is in degrees.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::units::{Degrees, Radians};
//!
//! let quarter = Radians(std::f64::consts::FRAC_PI_2);
//! let deg: Degrees = quarter.into();
//! assert!((deg.0 - 90.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}
