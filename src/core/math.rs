use std::f64::consts::PI;

/// Converts radians to degrees.
///
/// Evaluated as `rad * 180 / π` rather than `f64::to_degrees`, which multiplies by a
/// pre-rounded constant and can differ in the last bit.
#[inline]
pub fn rad_to_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Converts degrees to radians.
#[inline]
pub fn degree_to_rad(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Number of tiles along one axis at zoom `z` (`2^z`).
#[inline]
pub fn tile_count(z: u8) -> f64 {
    2.0_f64.powi(z as i32)
}

/// Longitude of the west edge of tile column `x` at zoom `z`.
#[inline]
pub fn tile_lng_at_x(x: i64, z: u8) -> f64 {
    x as f64 / tile_count(z) * 360.0 - 180.0
}

/// Latitude of the north edge of tile row `y` at zoom `z` (inverse Web Mercator).
#[inline]
pub fn tile_lat_at_y(y: i64, z: u8) -> f64 {
    let n = PI - (2.0 * PI * y as f64) / tile_count(z);
    rad_to_degree(n.sinh().atan())
}
