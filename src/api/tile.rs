use crate::api::bbox::BoundingBox;
use crate::api::point::Point;
use crate::core::math::{tile_lat_at_y, tile_lng_at_x};
use crate::util::coord::Coordinate;
use crate::util::error::TboxError;
use geo_types::Polygon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile address in the Web Mercator quad-tree (slippy map) scheme.
///
/// `y` grows southward, so row 0 is the northernmost row. Indices are signed and
/// not range-checked; tiles "on the map" satisfy `0 <= x, y < 2^z`.
///
/// # Example
///
/// ```
/// use tbox_rs::Tile;
///
/// let tile = Tile::new(11, 525, 761);
/// let bbox = tile.to_box();
/// assert_eq!(bbox.min_lng, -87.71484375);
/// assert_eq!(tile.children()[0].parent(), tile);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    /// Zoom level, the map is a `2^z` x `2^z` grid
    pub z: u8,
    /// Column, 0 at the antimeridian going east
    pub x: i64,
    /// Row, 0 at the north edge going south
    pub y: i64,
}

impl Tile {
    pub fn new(z: u8, x: i64, y: i64) -> Self {
        Self { z, x, y }
    }

    /// Create the tile containing a lng/lat coordinate at zoom `z`.
    ///
    /// # Example
    /// ```
    /// use tbox_rs::Tile;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), tbox_rs::TboxError> {
    /// // From tuple
    /// let tile = Tile::from_point(&(-87.65, 41.84), 3)?;
    /// // From Point
    /// let tile = Tile::from_point(&Point::new(-87.65, 41.84), 3)?;
    /// assert_eq!(tile, Tile::new(3, 2, 2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate, z: u8) -> Result<Self, TboxError> {
        Point::from_coord(coord).to_tile(z)
    }

    /// Returns the geographic extent of this tile.
    ///
    /// The far edges saturate at `i64::MAX`.
    pub fn to_box(&self) -> BoundingBox {
        BoundingBox {
            max_lat: tile_lat_at_y(self.y, self.z),
            min_lng: tile_lng_at_x(self.x, self.z),
            min_lat: tile_lat_at_y(self.y.saturating_add(1), self.z),
            max_lng: tile_lng_at_x(self.x.saturating_add(1), self.z),
        }
    }

    /// Tests whether a point lies strictly inside this tile.
    pub fn contains_point(&self, p: &Point) -> Result<bool, TboxError> {
        if !p.is_valid() {
            return Err(TboxError::invalid_point(p.lng, p.lat));
        }
        let tbox = self.to_box();

        Ok(p.lat > tbox.min_lat
            && p.lat < tbox.max_lat
            && p.lng > tbox.min_lng
            && p.lng < tbox.max_lng)
    }

    /// Returns the midpoint of this tile's bounding box.
    pub fn center(&self) -> Point {
        let tbox = self.to_box();

        let lng = tbox.min_lng + (tbox.max_lng - tbox.min_lng) / 2.0;
        let lat = tbox.min_lat + (tbox.max_lat - tbox.min_lat) / 2.0;

        Point::new(lng, lat)
    }

    /// Returns the four tiles one zoom level down covering this tile.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Zoom and indices saturate at their integer limits, so the children of a
    /// zoom 255 tile stay at zoom 255.
    pub fn children(&self) -> [Tile; 4] {
        let z = self.z.saturating_add(1);
        let x = self.x.saturating_mul(2);
        let y = self.y.saturating_mul(2);

        [
            Tile::new(z, x, y),
            Tile::new(z, x.saturating_add(1), y),
            Tile::new(z, x, y.saturating_add(1)),
            Tile::new(z, x.saturating_add(1), y.saturating_add(1)),
        ]
    }

    /// Returns the tile one zoom level up containing this tile.
    ///
    /// A zoom 0 tile has no parent and is returned unchanged.
    pub fn parent(&self) -> Tile {
        if self.z == 0 {
            return *self;
        }

        // Floor division: odd indices drop to the even sibling first.
        Tile::new(self.z - 1, self.x.div_euclid(2), self.y.div_euclid(2))
    }

    /// Converts this tile to its rectangular polygon in lng/lat.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_box().to_polygon()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
