//! Constants module for angle handling

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const FULL_TURN_DEG: f64 = 360.0;

// Right-angle multiples at which degree trigonometry is exact
/// A quarter turn
pub const RIGHT_ANGLE_DEG: f64 = 90.0;
/// A half turn
pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;
/// Three quarters of a turn
pub const THREE_QUARTER_TURN_DEG: f64 = 270.0;
