//! # Wheel Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Spec` - Validated input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `solve(spec) -> Result<*Result, GeometryError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`spoke`] - Spoke lengths, bracing/wrap/theta angles and tension split

pub mod spoke;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use spoke::{solve, solve_side, tension_split, BuildSpec, FlangeSide, SideGeometry, SideSummary, SpokeResult};

/// One side of the wheel.
///
/// Left is the non-drive side, right is the drive side. Every per-side
/// quantity is computed the same way for both; only the sign of the rim
/// drilling offset differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Non-drive side
    Left,
    /// Drive side
    Right,
}

impl Side {
    /// Both sides, left first
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Left (non-drive)",
            Side::Right => "Right (drive)",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
        let side: Side = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(side, Side::Left);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.label(), "Right (drive)");
    }
}
