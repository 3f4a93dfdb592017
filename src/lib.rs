//! Spatial vectors: immutable n-dimensional vectors over the reals
//!
//! A spatial vector is an ordered list of real coordinates. The coordinates of an
//! n-dimensional point are enough to describe a magnitude (the length of the arrow
//! from the origin) and a direction (the ray from the origin through the point).
//!
//! The crate provides the [`Vector`] value type, a spherical convenience
//! constructor ([`vector_from_spherical`]) and degree-valued trigonometry that is
//! exact at right angles ([`sin_d`], [`cos_d`]).
//!
//! ```rust
//! use spatial_vector::Vector;
//!
//! let x = Vector::new(&[1.0, 2.0, 3.0, 4.0]);
//! let y = Vector::new(&[5.0, 2.0, 4.0, 1.0]);
//!
//! assert_eq!((&x + &y).to_string(), "[6.0, 4.0, 7.0, 5.0]");
//! assert_eq!(x.dot(&y).unwrap(), 25.0);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod report;
pub mod vector;

// Re-export commonly used types
pub use coordinates::angle::{cos_d, normalize_degrees, sin_d};
pub use coordinates::spherical::{vector_from_spherical, vector_from_spherical_slice};
pub use vector::{Rounded, Vector};

/// Main error type for the spatial-vector library
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A binary operation received operands of different dimension
    #[error("Dimension mismatch in {operation}: left operand has {left} coordinates, right operand has {right}")]
    DimensionMismatch {
        /// Name of the operation that was attempted
        operation: &'static str,
        /// Dimension of the receiver
        left: usize,
        /// Dimension of the argument
        right: usize,
    },

    /// A coordinate index outside `[0, dimension)`
    #[error("Coordinate index {index} out of bounds for vector of dimension {dimension}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Dimension of the vector
        dimension: usize,
    },

    /// Spherical input did not hold exactly radius, azimuth and elevation
    #[error("Spherical input requires 3 values (radius, azimuth, elevation), got {0}")]
    InvalidSphericalInput(usize),
}

/// Result type for spatial-vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VectorError::DimensionMismatch {
            operation: "dot",
            left: 4,
            right: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in dot: left operand has 4 coordinates, right operand has 3"
        );

        let err = VectorError::IndexOutOfBounds {
            index: 7,
            dimension: 2,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate index 7 out of bounds for vector of dimension 2"
        );

        let err = VectorError::InvalidSphericalInput(2);
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_crate_level_reexports() {
        let v = vector_from_spherical(1.0, 0.0, 90.0);
        assert_eq!(v.dimension(), 3);
        assert_eq!(sin_d(90.0), 1.0);
        assert_eq!(cos_d(180.0), -1.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
    }
}
