//! # Vector Module
//!
//! The [`Vector`] type: an immutable ordered tuple of real numbers in
//! n-dimensional space.
//!
//! ## Immutability
//!
//! A `Vector` owns a private copy of its coordinates. Construction from a slice
//! copies the caller's data, so later changes to the source never reach the
//! vector, and no method hands out mutable access. Every operation returns a new
//! vector or a scalar.
//!
//! ## Operands of Different Dimension
//!
//! Addition, subtraction and the dot product are only defined between vectors of
//! equal dimension. The named methods ([`Vector::checked_add`],
//! [`Vector::checked_sub`], [`Vector::dot`]) report
//! [`VectorError::DimensionMismatch`]; the `+` and `-` operators panic with the
//! same message.
//!
//! ## Examples
//!
//! ```rust
//! use spatial_vector::Vector;
//!
//! let x = Vector::new(&[1.0, 2.0, 3.0, 4.0]);
//! let y = Vector::new(&[5.0, 2.0, 4.0, 1.0]);
//!
//! let sum = x.checked_add(&y).unwrap();
//! assert_eq!(sum.to_string(), "[6.0, 4.0, 7.0, 5.0]");
//! assert_eq!(x.scale(10.0).to_string(), "[10.0, 20.0, 30.0, 40.0]");
//! assert!((x.magnitude() - 30.0_f64.sqrt()).abs() < 1e-15);
//! ```

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use log::{debug, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::{Result, VectorError};

/// An immutable vector in n-dimensional real space
///
/// Equality, ordering and hashing are deliberately not implemented; compare
/// vectors through [`Vector::coordinates`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    coords: Vec<f64>,
}

impl Vector {
    /// Creates a vector holding a copy of `coords`
    ///
    /// The dimension is `coords.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial_vector::Vector;
    ///
    /// let mut source = vec![1.0, 2.0];
    /// let v = Vector::new(&source);
    /// source[0] = 99.0;
    /// assert_eq!(v[0], 1.0);
    /// ```
    pub fn new(coords: &[f64]) -> Self {
        Vector {
            coords: coords.to_vec(),
        }
    }

    /// Creates the zero vector of dimension `n`
    pub fn zeros(n: usize) -> Self {
        Vector {
            coords: vec![0.0; n],
        }
    }

    /// Number of coordinates
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// True for the zero-dimensional vector
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Read-only view of the coordinates
    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the `i`-th coordinate (0-indexed)
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] unless `i < dimension()`.
    pub fn coordinate(&self, i: usize) -> Result<f64> {
        self.coords
            .get(i)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds {
                index: i,
                dimension: self.dimension(),
            })
    }

    /// Element-wise sum
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial_vector::{Vector, VectorError};
    ///
    /// let a = Vector::new(&[1.0, 2.0]);
    /// let b = Vector::new(&[0.5, 0.5]);
    /// assert_eq!(a.checked_add(&b).unwrap().coordinates(), &[1.5, 2.5]);
    ///
    /// let c = Vector::new(&[1.0]);
    /// assert!(matches!(
    ///     a.checked_add(&c),
    ///     Err(VectorError::DimensionMismatch { left: 2, right: 1, .. })
    /// ));
    /// ```
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension("add", other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Element-wise difference `self - other`
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.require_same_dimension("subtract", other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiplies every coordinate by `alpha`
    pub fn scale(&self, alpha: f64) -> Vector {
        self.coords.iter().map(|&c| alpha * c).collect()
    }

    /// Dot product, `0.0` for zero-dimensional vectors
    ///
    /// `U · V = U1V1 + U2V2 + ... + UnVn`. For unit vectors `acos(U · V)` is
    /// the angle between them.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.require_same_dimension("dot", other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Cross product, defined in three dimensions only
    ///
    /// `U × V = (U2V3 - U3V2, U3V1 - U1V3, U1V2 - U2V1)`, normal to the plane
    /// spanned by `U` and `V`.
    ///
    /// When `self` is not 3-dimensional the result is an empty vector rather
    /// than an error. A 3-dimensional receiver paired with an operand of any
    /// other dimension fails with [`VectorError::DimensionMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial_vector::Vector;
    ///
    /// let x = Vector::new(&[1.0, 0.0, 0.0]);
    /// let y = Vector::new(&[0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y).unwrap().coordinates(), &[0.0, 0.0, 1.0]);
    ///
    /// let planar = Vector::new(&[1.0, 2.0]);
    /// assert!(planar.cross(&planar).unwrap().is_empty());
    /// ```
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.dimension() != 3 {
            debug!(
                "cross product requested in {} dimensions, returning empty vector",
                self.dimension()
            );
            return Ok(Vector::default());
        }
        self.require_same_dimension("cross", other)?;

        let (u, v) = (&self.coords, &other.coords);
        Ok(Vector::from(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Euclidean norm, `sqrt(self · self)`
    pub fn magnitude(&self) -> f64 {
        self.dot_unchecked(self).sqrt()
    }

    /// Unit vector in the direction of `self`
    ///
    /// Computed as `self.scale(1.0 / self.magnitude())` with no guard: for the
    /// zero vector the reciprocal is infinite and every coordinate becomes NaN.
    /// Check [`Vector::magnitude`] first when that matters.
    pub fn direction(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            warn!(
                "direction of a zero-magnitude vector in {} dimensions is undefined",
                self.dimension()
            );
        }
        self.scale(1.0 / magnitude)
    }

    /// Euclidean distance between two points, `|self - other|`
    pub fn distance_to(&self, other: &Vector) -> Result<f64> {
        Ok(self.checked_sub(other)?.magnitude())
    }

    /// Converts to a nalgebra dynamically sized column vector
    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.coords)
    }

    fn require_same_dimension(&self, operation: &'static str, other: &Vector) -> Result<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch {
                operation,
                left: self.dimension(),
                right: other.dimension(),
            })
        }
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    // Explicit 0.0 seed: an empty float `sum()` may yield -0.0
    fn dot_unchecked(&self, other: &Vector) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .fold(0.0, |acc, (&a, &b)| acc + a * b)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(coords: Vec<f64>) -> Self {
        Vector { coords }
    }
}

impl From<&[f64]> for Vector {
    fn from(coords: &[f64]) -> Self {
        Vector::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(coords: [f64; N]) -> Self {
        Vector {
            coords: coords.to_vec(),
        }
    }
}

impl From<DVector<f64>> for Vector {
    fn from(vec: DVector<f64>) -> Self {
        vec.iter().copied().collect()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector {
            coords: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// # Panics
    ///
    /// Panics with the [`VectorError::IndexOutOfBounds`] message when
    /// `i >= dimension()`.
    fn index(&self, i: usize) -> &f64 {
        match self.coords.get(i) {
            Some(c) => c,
            None => panic!(
                "{}",
                VectorError::IndexOutOfBounds {
                    index: i,
                    dimension: self.dimension(),
                }
            ),
        }
    }
}

// Operators panic where the named methods return an error
impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        self.checked_add(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        &self + &other
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        self.checked_sub(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        &self - &other
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, alpha: f64) -> Vector {
        self.scale(alpha)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, alpha: f64) -> Vector {
        self.scale(alpha)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: &Vector) -> Vector {
        v.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.coords.iter().map(|&c| -c).collect()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

/// Formats one coordinate as the shortest decimal that reads back to the same
/// `f64`
///
/// Integral values keep a trailing `.0`; magnitudes below `1e-4` or from `1e16`
/// up switch to scientific notation with a signed exponent of at least two
/// digits (`1e-07`, `2.5e+16`). Non-finite values print as `nan`, `inf` and
/// `-inf`.
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

impl fmt::Display for Vector {
    /// Renders the coordinates as a sequence literal: `[1.0, 2.0, 3.0]`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, &c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", format_coordinate(c))?;
        }
        write!(f, "]")
    }
}

/// A tiny wrapper for printing a `Vector` rounded to a fixed number of decimals.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for printing with `decimals` digits.
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "[")?;
        for (i, c) in v.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.dec$}", c = c, dec = dec)?;
        }
        write!(f, "]")
    }
}
