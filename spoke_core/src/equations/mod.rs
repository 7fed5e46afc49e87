//! # Wheel Geometry Equations
//!
//! The closed-form formulas behind the spoke calculator, kept in one place so
//! the solver reads as a sequence of named steps and each formula can be
//! checked on its own.
//!
//! ## Modules
//!
//! - [`spoke`] - Hub-hole to rim-hole triangle (length, lacing angle, bracing angle)
//!
//! ## Sign Conventions
//!
//! - **Rim offset**: Positive for drilling that favors the drive side, i.e.
//!   spoke holes shifted toward the left flange. Adds to the right (drive)
//!   axial separation and subtracts from the left
//! - **Axial separation**: Positive when the flange lies outboard of the nipple
//!   hole plane on its own side
//! - **Bracing angle**: Carries the sign of the axial separation

pub mod spoke;

pub use spoke::{
    axial_separation,
    bracing_angle,
    hole_to_hole_distance,
    lacing_angle,
    nipple_compensation,
    planar_distance_squared,
};
