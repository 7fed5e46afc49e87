//! # Rounding Policy
//!
//! Converts exact spoke lengths into lengths a builder can order or cut.
//! Reported lengths always use a 0.5 mm step; ties round half away from
//! zero (`f64::round`), so 290.25 becomes 290.5 and 290.75 becomes 291.0.
//! The exact value is always reported alongside the rounded one.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::rounding::{round_to_half_mm, round_to_stock_length};
//!
//! assert_eq!(round_to_half_mm(292.919), 293.0);
//! assert_eq!(round_to_half_mm(290.25), 290.5);
//!
//! // Some spoke lines only stock 2 mm steps
//! assert_eq!(round_to_stock_length(292.919, 2.0), 292.0);
//! ```

/// Manufacturable length step used for every reported rounded length (mm)
pub const HALF_MM: f64 = 0.5;

/// Round `value` to the nearest multiple of `step`, ties away from zero.
///
/// `step` must be positive. The multiple count is rounded before scaling
/// back, so for steps that are exact binary fractions (0.5, 0.25, 2.0)
/// ties are detected exactly.
#[inline]
pub fn round_to_increment(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0, "rounding step must be positive");
    (value / step).round() * step
}

/// Round a spoke length to the nearest 0.5 mm.
///
/// Guarantees `|round_to_half_mm(x) - x| <= 0.25` for every finite `x`.
#[inline]
pub fn round_to_half_mm(length_mm: f64) -> f64 {
    round_to_increment(length_mm, HALF_MM)
}

/// Round to a supplier's stock increment (e.g. 2 mm), same tie-break.
///
/// Not used for the reported `*_rounded` fields; offered for callers that
/// want to check what a coarser spoke line would give.
#[inline]
pub fn round_to_stock_length(length_mm: f64, step_mm: f64) -> f64 {
    round_to_increment(length_mm, step_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_nearest_half() {
        assert_eq!(round_to_half_mm(292.919), 293.0);
        assert_eq!(round_to_half_mm(292.6), 292.5);
        assert_eq!(round_to_half_mm(292.74), 292.5);
        assert_eq!(round_to_half_mm(292.76), 293.0);
        assert_eq!(round_to_half_mm(292.0), 292.0);
    }

    #[test]
    fn test_quarter_mm_ties_round_away_from_zero() {
        // Exact quarter points are the tie boundaries
        assert_eq!(round_to_half_mm(290.25), 290.5);
        assert_eq!(round_to_half_mm(290.75), 291.0);
        assert_eq!(round_to_half_mm(0.25), 0.5);
        assert_eq!(round_to_half_mm(-0.25), -0.5);
        assert_eq!(round_to_half_mm(-290.75), -291.0);
    }

    #[test]
    fn test_never_uniformly_rounds_down() {
        assert_eq!(round_to_half_mm(263.3), 263.5);
        assert_eq!(round_to_half_mm(263.2), 263.0);
    }

    #[test]
    fn test_error_bounded_by_quarter_mm() {
        let mut x = 150.0;
        while x < 320.0 {
            let rounded = round_to_half_mm(x);
            assert!((rounded - x).abs() <= 0.25, "x = {}, rounded = {}", x, rounded);
            x += 0.037;
        }
    }

    #[test]
    fn test_stock_length_two_mm() {
        assert_eq!(round_to_stock_length(292.919, 2.0), 292.0);
        assert_eq!(round_to_stock_length(293.0, 2.0), 294.0);
        assert_eq!(round_to_stock_length(291.2, 2.0), 292.0);
    }
}
