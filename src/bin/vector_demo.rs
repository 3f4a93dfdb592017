//! Vector Demonstration Tool
//!
//! Builds two vectors, prints them together with their sum, a scaled copy,
//! magnitude, dot product and the magnitude of their difference. Optionally
//! converts a spherical point to Cartesian form.
//!
//! Usage:
//!   cargo run --bin vector_demo -- [--x 1,2,3] [--y 4,5,6] [--precision 3] [--spherical r,az,el]

use clap::Parser;
use spatial_vector::report::{render_vector, summary_lines, DEFAULT_X, DEFAULT_Y};
use spatial_vector::{vector_from_spherical_slice, Vector};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Spatial vector demonstration
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints the basic operations on a pair of spatial vectors",
    long_about = None
)]
struct Args {
    /// Coordinates of x, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = DEFAULT_X.to_vec())]
    x: Vec<f64>,

    /// Coordinates of y, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = DEFAULT_Y.to_vec())]
    y: Vec<f64>,

    /// Print every number with this many decimals
    #[arg(short, long)]
    precision: Option<usize>,

    /// Spherical point to convert: radius,azimuth,elevation (degrees)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    spherical: Option<Vec<f64>>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Displays the Cartesian form of a spherical point
fn display_spherical(values: &[f64], x: &Vector, precision: Option<usize>) -> Result<()> {
    let point = vector_from_spherical_slice(values)?;

    print_section_header("Spherical Conversion");
    println!("(r, az, el) = {:?}", values);
    println!("cartesian   = {}", render_vector(&point, precision));
    println!("|cartesian| = {}", point.magnitude());

    if x.dimension() == 3 {
        let normal = x.cross(&point)?;
        println!("x × point   = {}", render_vector(&normal, precision));
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let x = Vector::from(args.x);
    let y = Vector::from(args.y);

    for line in summary_lines(&x, &y, args.precision)? {
        println!("{}", line);
    }

    if let Some(values) = args.spherical.as_deref() {
        display_spherical(values, &x, args.precision)?;
    }

    Ok(())
}
