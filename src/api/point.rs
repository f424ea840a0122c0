use crate::api::tile::Tile;
use crate::core::constants::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
use crate::core::math::{degree_to_rad, tile_count};
use crate::util::coord::Coordinate;
use crate::util::error::TboxError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A geographic coordinate in degrees (WGS84 longitude/latitude).
///
/// # Example
///
/// ```
/// use tbox_rs::{Point, Tile};
///
/// # fn main() -> Result<(), tbox_rs::TboxError> {
/// let chicago = Point::new(-87.65, 41.84);
/// assert!(chicago.is_valid());
/// assert_eq!(chicago.to_tile(3)?, Tile::new(3, 2, 2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Longitude, -180 to 180
    pub lng: f64,
    /// Latitude, -90 to 90
    pub lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Create a Point from anything that yields lng (x) and lat (y).
    pub fn from_coord(coord: &impl Coordinate) -> Self {
        Self::new(coord.x(), coord.y())
    }

    /// Returns true when lng is in [-180, 180] and lat in [-90, 90], both ends inclusive.
    pub fn is_valid(&self) -> bool {
        self.lng >= MIN_LNG && self.lng <= MAX_LNG && self.lat >= MIN_LAT && self.lat <= MAX_LAT
    }

    /// Returns the tile containing this point at zoom `z`.
    ///
    /// Tile indices are truncated toward zero, so latitudes beyond the Web Mercator
    /// limit produce rows outside `0..2^z` rather than an error.
    pub fn to_tile(&self, z: u8) -> Result<Tile, TboxError> {
        if !self.is_valid() {
            return Err(TboxError::invalid_point(self.lng, self.lat));
        }

        let lat_rad = degree_to_rad(self.lat);
        let n = tile_count(z);

        let x = ((self.lng + 180.0) / 360.0 * n) as i64;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as i64;

        Ok(Tile::new(z, x, y))
    }

    /// Tests whether this point lies strictly inside the tile's bounding box.
    ///
    /// Points exactly on a tile edge belong to neither neighbouring tile.
    pub fn in_tile(&self, tile: &Tile) -> Result<bool, TboxError> {
        if !self.is_valid() {
            return Err(TboxError::invalid_point(self.lng, self.lat));
        }
        let tbox = tile.to_box();

        Ok(self.lng > tbox.min_lng
            && self.lat > tbox.min_lat
            && self.lng < tbox.max_lng
            && self.lat < tbox.max_lat)
    }

    /// Alias for [`Point::in_tile`].
    pub fn intersects(&self, tile: &Tile) -> Result<bool, TboxError> {
        self.in_tile(tile)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.lng, p.lat)
    }
}
