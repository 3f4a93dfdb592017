//! # Degree Trigonometry Module
//!
//! Sine and cosine of angles given in degrees, exact at the right-angle multiples.
//!
//! ## Precision at Right Angles
//!
//! Converting degrees to radians and calling [`f64::sin`]/[`f64::cos`] leaves
//! floating-point noise at axis-aligned angles: `cos(90°)` evaluates to about
//! `6.12e-17` instead of `0`. Geometry built from those values loses exact zeros,
//! so [`sin_d`] and [`cos_d`] first reduce the angle into `[0, 360)` and return the
//! exact values `1.0`, `0.0` or `-1.0` at 90°, 180° and 270°. Every other angle
//! (0° included, where the radian path is already exact) goes through the
//! standard functions.
//!
//! ## Examples
//!
//! ```rust
//! use spatial_vector::coordinates::angle::{cos_d, sin_d};
//!
//! assert_eq!(cos_d(90.0), 0.0);
//! assert_eq!(sin_d(270.0), -1.0);
//! assert_eq!(sin_d(450.0), sin_d(90.0));
//! ```

use crate::constants::{
    DEG2RAD, FULL_TURN_DEG, RIGHT_ANGLE_DEG, STRAIGHT_ANGLE_DEG, THREE_QUARTER_TURN_DEG,
};

/// Reduces an angle in degrees modulo 360
///
/// The result takes the sign of the divisor, so negative angles wrap to the
/// positive side: `-90` becomes `270`. The result lies in `[0, 360)` except for
/// negative inputs so small that the sum rounds up to exactly `360.0`. A zero
/// result is always `+0.0`, including for `-0.0` and negative multiples of 360.
///
/// # Examples
///
/// ```rust
/// use spatial_vector::coordinates::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// ```
pub fn normalize_degrees(degrees: f64) -> f64 {
    // Adding +0.0 turns a -0.0 remainder into +0.0
    degrees.rem_euclid(FULL_TURN_DEG) + 0.0
}

/// Returns the sine of an angle in degrees
///
/// Exact at 90° (`1.0`), 180° (`0.0`) and 270° (`-1.0`) after reduction
/// modulo 360.
pub fn sin_d(degrees: f64) -> f64 {
    let reduced = normalize_degrees(degrees);
    if reduced == RIGHT_ANGLE_DEG {
        1.0
    } else if reduced == STRAIGHT_ANGLE_DEG {
        0.0
    } else if reduced == THREE_QUARTER_TURN_DEG {
        -1.0
    } else {
        (reduced * DEG2RAD).sin()
    }
}

/// Returns the cosine of an angle in degrees
///
/// Exact at 90° (`0.0`), 180° (`-1.0`) and 270° (`0.0`) after reduction
/// modulo 360.
pub fn cos_d(degrees: f64) -> f64 {
    let reduced = normalize_degrees(degrees);
    if reduced == RIGHT_ANGLE_DEG {
        0.0
    } else if reduced == STRAIGHT_ANGLE_DEG {
        -1.0
    } else if reduced == THREE_QUARTER_TURN_DEG {
        0.0
    } else {
        (reduced * DEG2RAD).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_exact_at_right_angles() {
        assert_eq!(cos_d(0.0), 1.0);
        assert_eq!(cos_d(90.0), 0.0);
        assert_eq!(cos_d(180.0), -1.0);
        assert_eq!(cos_d(270.0), 0.0);
    }

    #[test]
    fn test_sine_exact_at_right_angles() {
        assert_eq!(sin_d(0.0), 0.0);
        assert_eq!(sin_d(90.0), 1.0);
        assert_eq!(sin_d(180.0), 0.0);
        assert_eq!(sin_d(270.0), -1.0);
    }

    #[test]
    fn test_radian_path_leaves_noise() {
        // Radian path alone is off by about 6e-17
        let naive = (90.0 * DEG2RAD).cos();
        assert_ne!(naive, 0.0);
        assert!(naive.abs() < 1e-15);
    }

    #[test]
    fn test_angle_reduction() {
        assert_eq!(sin_d(450.0), sin_d(90.0));
        assert_eq!(cos_d(540.0), -1.0);
        assert_eq!(sin_d(-90.0), -1.0);
        assert_eq!(cos_d(-180.0), -1.0);
        assert_eq!(sin_d(720.0 + 270.0), -1.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(359.5), 359.5);
        assert_eq!(normalize_degrees(-360.0), 0.0);
    }

    #[test]
    fn test_reduction_never_yields_negative_zero() {
        for degrees in [-0.0, -360.0, -720.0, 360.0, 0.0] {
            let reduced = normalize_degrees(degrees);
            assert_eq!(reduced, 0.0);
            assert!(
                reduced.is_sign_positive(),
                "negative zero from {} degrees",
                degrees
            );
        }
        assert!(sin_d(-360.0).is_sign_positive());
        assert!(sin_d(-0.0).is_sign_positive());
        assert_eq!(cos_d(-360.0), 1.0);
    }

    #[test]
    fn test_general_angles_use_standard_functions() {
        assert!((sin_d(30.0) - 0.5).abs() < 1e-15);
        assert!((cos_d(60.0) - 0.5).abs() < 1e-15);
        assert!((sin_d(45.0) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((cos_d(45.0) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((sin_d(210.0) + 0.5).abs() < 1e-15);
        assert!((cos_d(300.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_pythagorean_identity() {
        for step in 0..72 {
            let degrees = step as f64 * 5.0 - 180.0;
            let s = sin_d(degrees);
            let c = cos_d(degrees);
            assert!(
                (s * s + c * c - 1.0).abs() < 1e-15,
                "identity fails at {} degrees",
                degrees
            );
        }
    }
}
