//! # Spherical Construction Module
//!
//! Builds three-dimensional Cartesian [`Vector`]s from spherical coordinates.
//!
//! ## Coordinate Convention
//!
//! ```text
//!            Z
//!            |
//!            |    . a(r, φ, θ)
//!            |-θ-/:
//!            |  / :
//!            | /  :
//!            |/   :
//!            +----:-------Y
//!           / \   :
//!          /   \  :
//!         /--φ--\ :
//!        /       \:
//!       /         .
//!      X
//! ```
//!
//! - `r`: radius
//! - `φ`: azimuth in degrees, measured in the XY plane from the X axis
//! - `θ`: elevation in degrees, measured from the Z axis
//!
//! The conversion is `x = r cos φ sin θ`, `y = r sin φ sin θ`, `z = r cos θ`,
//! using the degree trigonometry of [`crate::coordinates::angle`] so that
//! axis-aligned inputs give exact zeros. The spherical parameters are not kept:
//! the result is a plain 3-dimensional vector.

use log::trace;

use crate::coordinates::angle::{cos_d, sin_d};
use crate::vector::Vector;
use crate::{Result, VectorError};

/// Creates a 3-dimensional vector from radius, azimuth and elevation
///
/// # Arguments
///
/// * `r` - Radius
/// * `azimuth` - Azimuth in degrees
/// * `elevation` - Elevation from the Z axis in degrees
///
/// # Examples
///
/// ```rust
/// use spatial_vector::vector_from_spherical;
///
/// let v = vector_from_spherical(2.0, 90.0, 90.0);
/// assert_eq!(v.to_string(), "[0.0, 2.0, 0.0]");
/// ```
pub fn vector_from_spherical(r: f64, azimuth: f64, elevation: f64) -> Vector {
    let sin_elevation = sin_d(elevation);
    let x = r * cos_d(azimuth) * sin_elevation;
    let y = r * sin_d(azimuth) * sin_elevation;
    let z = r * cos_d(elevation);
    trace!(
        "spherical (r={}, az={}, el={}) -> cartesian ({}, {}, {})",
        r,
        azimuth,
        elevation,
        x,
        y,
        z
    );
    Vector::from(vec![x, y, z])
}

/// Creates a vector from a `[r, azimuth, elevation]` slice
///
/// Fails with [`VectorError::InvalidSphericalInput`] unless exactly three values
/// are given.
pub fn vector_from_spherical_slice(values: &[f64]) -> Result<Vector> {
    match values {
        [r, azimuth, elevation] => Ok(vector_from_spherical(*r, *azimuth, *elevation)),
        _ => Err(VectorError::InvalidSphericalInput(values.len())),
    }
}

impl Vector {
    /// Creates a 3-dimensional vector from `[r, azimuth, elevation]`
    ///
    /// Same conversion as [`vector_from_spherical`].
    pub fn from_spherical(spherical: [f64; 3]) -> Self {
        let [r, azimuth, elevation] = spherical;
        vector_from_spherical(r, azimuth, elevation)
    }
}
