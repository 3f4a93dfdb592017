pub mod angle;
pub mod spherical;

pub use angle::{cos_d, normalize_degrees, sin_d};
pub use spherical::{vector_from_spherical, vector_from_spherical_slice};
