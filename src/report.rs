//! Labelled summary of the basic operations on a pair of vectors
//!
//! Produces the lines printed by the `vector_demo` binary:
//!
//! ```text
//! x        = [1.0, 2.0, 3.0, 4.0]
//! y        = [5.0, 2.0, 4.0, 1.0]
//! x + y    = [6.0, 4.0, 7.0, 5.0]
//! 10x      = [10.0, 20.0, 30.0, 40.0]
//! |x|      = 5.477225575051661
//! <x, y>   = 25.0
//! |x - y|  = 5.0990195135927845
//! ```

use crate::vector::{format_coordinate, Rounded, Vector};
use crate::Result;

/// Scale factor applied to `x` in the summary
pub const SUMMARY_SCALE: f64 = 10.0;

/// Coordinates of `x` used when none are supplied
pub const DEFAULT_X: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Coordinates of `y` used when none are supplied
pub const DEFAULT_Y: [f64; 4] = [5.0, 2.0, 4.0, 1.0];

/// One labelled line of the summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Fixed-width label, including the trailing `= `
    pub label: &'static str,
    /// Rendered value
    pub value: String,
}

impl std::fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.label, self.value)
    }
}

/// Renders a vector with `precision` decimals, or in its shortest exact form
pub fn render_vector(v: &Vector, precision: Option<usize>) -> String {
    match precision {
        Some(decimals) => Rounded::new(v, decimals).to_string(),
        None => v.to_string(),
    }
}

fn render_scalar(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(decimals) => format!("{:.*}", decimals, value),
        None => format_coordinate(value),
    }
}

/// Builds the summary for `x` and `y`
///
/// With `precision` set, every number is printed with that many decimals;
/// otherwise the shortest exact form is used. Fails with
/// [`crate::VectorError::DimensionMismatch`] when `x` and `y` differ in
/// dimension.
pub fn summary_lines(x: &Vector, y: &Vector, precision: Option<usize>) -> Result<Vec<SummaryLine>> {
    let sum = x.checked_add(y)?;
    let dot = x.dot(y)?;
    let distance = x.distance_to(y)?;

    let line = |label, value| SummaryLine { label, value };
    Ok(vec![
        line("x        = ", render_vector(x, precision)),
        line("y        = ", render_vector(y, precision)),
        line("x + y    = ", render_vector(&sum, precision)),
        line("10x      = ", render_vector(&x.scale(SUMMARY_SCALE), precision)),
        line("|x|      = ", render_scalar(x.magnitude(), precision)),
        line("<x, y>   = ", render_scalar(dot, precision)),
        line("|x - y|  = ", render_scalar(distance, precision)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorError;

    #[test]
    fn test_default_summary() {
        let x = Vector::from(DEFAULT_X);
        let y = Vector::from(DEFAULT_Y);
        let lines: Vec<String> = summary_lines(&x, &y, None)
            .unwrap()
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "x        = [1.0, 2.0, 3.0, 4.0]",
                "y        = [5.0, 2.0, 4.0, 1.0]",
                "x + y    = [6.0, 4.0, 7.0, 5.0]",
                "10x      = [10.0, 20.0, 30.0, 40.0]",
                "|x|      = 5.477225575051661",
                "<x, y>   = 25.0",
                "|x - y|  = 5.0990195135927845",
            ]
        );
    }

    #[test]
    fn test_summary_with_precision() {
        let x = Vector::from(DEFAULT_X);
        let y = Vector::from(DEFAULT_Y);
        let lines = summary_lines(&x, &y, Some(2)).unwrap();

        assert_eq!(lines[0].value, "[1.00, 2.00, 3.00, 4.00]");
        assert_eq!(lines[4].value, "5.48");
        assert_eq!(lines[5].value, "25.00");
        assert_eq!(lines[6].value, "5.10");
    }

    #[test]
    fn test_render_vector() {
        let v = Vector::from([0.5, -2.0]);
        assert_eq!(render_vector(&v, None), "[0.5, -2.0]");
        assert_eq!(render_vector(&v, Some(1)), "[0.5, -2.0]");
        assert_eq!(render_vector(&v, Some(3)), "[0.500, -2.000]");
    }

    #[test]
    fn test_summary_dimension_mismatch() {
        let x = Vector::from([1.0, 2.0]);
        let y = Vector::from([1.0, 2.0, 3.0]);
        assert!(matches!(
            summary_lines(&x, &y, None),
            Err(VectorError::DimensionMismatch { operation: "add", .. })
        ));
    }
}
