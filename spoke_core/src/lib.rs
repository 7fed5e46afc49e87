//! # spoke_core - Wheel Geometry Engine
//!
//! `spoke_core` computes spoke lengths and wheel build angles from rim and
//! hub measurements. It is a library call, not a service: a caller supplies
//! a [`BuildSpec`], gets back a [`SpokeResult`] or a [`GeometryError`], and
//! owns everything else (storage, accounts, display).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, safe to call from any thread without locking
//! - **Validate first**: Every input check runs before any computation
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Exact and rounded**: Rounded 0.5 mm lengths never replace the exact value
//!
//! ## Quick Start
//!
//! ```rust
//! use spoke_core::{solve, BuildSpec};
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
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("spoke_length_left"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Validator and geometry solver
//! - [`equations`] - Closed-form spoke triangle formulas
//! - [`rounding`] - Manufacturable length rounding
//! - [`components`] - Rim/hub records and build requests
//! - [`settings`] - Defaults for optional inputs
//! - [`units`] - Angle unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod components;
pub mod equations;
pub mod errors;
pub mod rounding;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, BuildSpec, Side, SpokeResult};
pub use components::{BuildRequest, Hub, LacingParams, Rim};
pub use errors::{GeometryError, GeometryResult};
pub use rounding::round_to_half_mm;
pub use settings::CalculatorSettings;
