use crate::api::point::Point;
use crate::api::tile::Tile;
use crate::core::constants::{MAX_LNG, MERCATOR_LAT_LIMIT, MIN_LNG};
use crate::core::geometry::create_box;
use crate::core::math::tile_count;
use crate::util::error::TboxError;
use geo::BoundingRect;
use geo_types::{Geometry, Polygon, Rect};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// A lng/lat rectangle.
///
/// `min_lng > max_lng` marks a box crossing the antimeridian; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Create a box from a `geo_types::Rect` (x = lng, y = lat).
    ///
    /// `Rect` normalizes its corners, so the result never crosses the antimeridian.
    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lng > self.max_lng
    }

    /// Splits an antimeridian-crossing box into its west and east parts.
    ///
    /// Boxes that do not cross are returned as the only element.
    pub fn split_antimeridian(&self) -> Vec<BoundingBox> {
        if !self.crosses_antimeridian() {
            return vec![*self];
        }

        vec![
            BoundingBox::new(MIN_LNG, self.min_lat, self.max_lng, self.max_lat),
            BoundingBox::new(self.min_lng, self.min_lat, MAX_LNG, self.max_lat),
        ]
    }

    /// Clamps the box to lng [-180, 180] and lat [-85, 85].
    pub fn clamp_to_mercator(&self) -> BoundingBox {
        BoundingBox::new(
            self.min_lng.max(MIN_LNG),
            self.min_lat.max(-MERCATOR_LAT_LIMIT),
            self.max_lng.min(MAX_LNG),
            self.max_lat.min(MERCATOR_LAT_LIMIT),
        )
    }

    /// Converts the box to a rectangle polygon.
    ///
    /// The polygon is built from the raw extent, so an antimeridian-crossing box
    /// yields the complementary (wrong-way) rectangle; split it first if that matters.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_box(self.min_lng, self.min_lat, self.max_lng, self.max_lat)
    }

    /// Method form of [`tiles_for_bounds`].
    pub fn tiles(&self, z: u8) -> Result<Vec<Tile>, TboxError> {
        tiles_for_bounds(self, z)
    }
}

/// Returns every tile at zoom `z` intersecting the bounding box.
///
/// Boxes crossing the antimeridian are split and their west part is listed first.
/// Within each part, tiles are listed row by row from north to south.
///
/// # Example
///
/// ```
/// use tbox_rs::{BoundingBox, Tile, tiles_for_bounds};
///
/// # fn main() -> Result<(), tbox_rs::TboxError> {
/// let bbox = BoundingBox::new(10.045, 51.2114, 13.825, 53.575);
/// let tiles = tiles_for_bounds(&bbox, 7)?;
/// assert_eq!(
///     tiles,
///     vec![
///         Tile::new(7, 67, 41),
///         Tile::new(7, 68, 41),
///         Tile::new(7, 67, 42),
///         Tile::new(7, 68, 42),
///     ]
/// );
/// # Ok(())
/// # }
/// ```
pub fn tiles_for_bounds(bbox: &BoundingBox, z: u8) -> Result<Vec<Tile>, TboxError> {
    let parts = bbox.split_antimeridian();
    if parts.len() > 1 {
        debug!(
            "bounding box {:?} crosses the antimeridian, split into {} parts",
            bbox,
            parts.len()
        );
    }

    let n = tile_count(z);
    let mut tiles = Vec::new();

    for part in parts {
        let part = part.clamp_to_mercator();

        let ult = Point::new(part.min_lng, part.max_lat).to_tile(z)?;
        let lrt = Point::new(part.max_lng, part.min_lat).to_tile(z)?;
        trace!("part {:?} spans tiles {} to {}", part, ult, lrt);

        for y in ult.y..=lrt.y {
            if y as f64 >= n {
                continue;
            }
            for x in ult.x..=lrt.x {
                if x as f64 >= n {
                    continue;
                }
                tiles.push(Tile::new(z, x, y));
            }
        }
    }

    debug!("{} tiles at zoom {} cover {:?}", tiles.len(), z, bbox);
    Ok(tiles)
}

/// Returns the tiles at zoom `z` covering a geometry.
///
/// Points and multi-points map to the tile of each point. Any other geometry is
/// covered through its bounding rectangle, so the result may include tiles the
/// geometry itself does not touch. Empty geometries yield no tiles.
pub fn tiles_for_geometry(geom: &Geometry<f64>, z: u8) -> Result<Vec<Tile>, TboxError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![Tile::from_point(pt, z)?]),
        Geometry::MultiPoint(mp) => mp.iter().map(|pt| Tile::from_point(pt, z)).collect(),
        other => match other.bounding_rect() {
            Some(rect) => tiles_for_bounds(&BoundingBox::from_rect(&rect), z),
            None => Ok(Vec::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{LineString, MultiPoint, coord, line_string, point};

    fn sorted(mut tiles: Vec<Tile>) -> Vec<Tile> {
        tiles.sort();
        tiles
    }

    #[test]
    fn test_tiles_for_bounds() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(10.045, 51.2114, 13.825, 53.575);
        let tiles = tiles_for_bounds(&bbox, 7)?;

        assert_eq!(
            tiles,
            vec![
                Tile::new(7, 67, 41),
                Tile::new(7, 68, 41),
                Tile::new(7, 67, 42),
                Tile::new(7, 68, 42),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_tiles_for_bounds_antimeridian() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(178.65, 70.81, -177.58, 71.6);
        let tiles = tiles_for_bounds(&bbox, 7)?;

        assert_eq!(tiles.len(), 4);
        assert_eq!(
            sorted(tiles.clone()),
            sorted(vec![
                Tile::new(7, 127, 26),
                Tile::new(7, 0, 26),
                Tile::new(7, 127, 27),
                Tile::new(7, 0, 27),
            ])
        );
        // West part first.
        assert_eq!(tiles[0].x, 0);
        assert_eq!(tiles[1].x, 0);
        Ok(())
    }

    #[test]
    fn test_whole_world_at_zoom_one() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
        let tiles = tiles_for_bounds(&bbox, 1)?;

        assert_eq!(
            tiles,
            vec![
                Tile::new(1, 0, 0),
                Tile::new(1, 1, 0),
                Tile::new(1, 0, 1),
                Tile::new(1, 1, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_whole_world_at_zoom_zero() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(-180.0, -85.0, 180.0, 85.0);
        assert_eq!(tiles_for_bounds(&bbox, 0)?, vec![Tile::new(0, 0, 0)]);
        Ok(())
    }

    #[test]
    fn test_tiles_stay_on_map() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(170.0, -89.0, 180.0, 89.0);
        let z = 4;
        let n = 1_i64 << z;

        let tiles = tiles_for_bounds(&bbox, z)?;
        assert!(!tiles.is_empty());
        for tile in tiles {
            assert!(tile.x >= 0 && tile.x < n);
            assert!(tile.y >= 0 && tile.y < n);
        }
        Ok(())
    }

    #[test]
    fn test_column_past_east_edge_is_dropped() -> Result<(), TboxError> {
        // The lower-right corner at lng 180 converts to column 8 == 2^3.
        let bbox = BoundingBox::new(170.0, 0.0, 180.0, 10.0);
        assert_eq!(Point::new(180.0, 0.0).to_tile(3)?, Tile::new(3, 8, 4));

        let tiles = tiles_for_bounds(&bbox, 3)?;
        assert_eq!(tiles, vec![Tile::new(3, 7, 3), Tile::new(3, 7, 4)]);
        Ok(())
    }

    #[test]
    fn test_out_of_range_box_is_clamped_not_rejected() -> Result<(), TboxError> {
        let bbox = BoundingBox::new(-500.0, -100.0, 500.0, 100.0);
        assert_eq!(tiles_for_bounds(&bbox, 2)?.len(), 16);
        Ok(())
    }

    #[test]
    fn test_split_antimeridian() {
        let bbox = BoundingBox::new(178.65, 70.81, -177.58, 71.6);
        assert!(bbox.crosses_antimeridian());
        assert_eq!(
            bbox.split_antimeridian(),
            vec![
                BoundingBox::new(-180.0, 70.81, -177.58, 71.6),
                BoundingBox::new(178.65, 70.81, 180.0, 71.6),
            ]
        );

        let plain = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert!(!plain.crosses_antimeridian());
        assert_eq!(plain.split_antimeridian(), vec![plain]);
    }

    #[test]
    fn test_clamp_to_mercator() {
        let bbox = BoundingBox::new(-200.0, -89.0, 200.0, 89.0).clamp_to_mercator();
        assert_eq!(bbox, BoundingBox::new(-180.0, -85.0, 180.0, 85.0));
    }

    #[test]
    fn test_from_rect() -> Result<(), TboxError> {
        let rect = Rect::new(
            coord! { x: 13.825, y: 53.575 },
            coord! { x: 10.045, y: 51.2114 },
        );
        let bbox = BoundingBox::from_rect(&rect);
        assert_eq!(bbox, BoundingBox::new(10.045, 51.2114, 13.825, 53.575));
        assert_eq!(bbox.tiles(7)?.len(), 4);
        Ok(())
    }

    #[test]
    fn test_tiles_for_geometry_line() -> Result<(), TboxError> {
        let line = Geometry::LineString(line_string![
            (x: 10.045, y: 51.2114),
            (x: 13.825, y: 53.575),
        ]);
        let bbox = BoundingBox::new(10.045, 51.2114, 13.825, 53.575);
        assert_eq!(tiles_for_geometry(&line, 7)?, tiles_for_bounds(&bbox, 7)?);
        Ok(())
    }

    #[test]
    fn test_tiles_for_geometry_points() -> Result<(), TboxError> {
        let pt = Geometry::Point(point! { x: -87.65, y: 41.84 });
        assert_eq!(tiles_for_geometry(&pt, 11)?, vec![Tile::new(11, 525, 761)]);

        let mp = Geometry::MultiPoint(MultiPoint::from(vec![(-87.65, 41.84), (13.37, 52.25)]));
        assert_eq!(
            tiles_for_geometry(&mp, 11)?,
            vec![Tile::new(11, 525, 761), Tile::new(11, 1100, 674)]
        );
        Ok(())
    }

    #[test]
    fn test_tiles_for_geometry_invalid_and_empty() -> Result<(), TboxError> {
        let bad = Geometry::Point(point! { x: -190.0, y: 52.0 });
        assert_eq!(
            tiles_for_geometry(&bad, 3).unwrap_err().to_string(),
            "Point{Lat: 52, Lng: -190} - invalid point"
        );

        let empty = Geometry::LineString(LineString::<f64>::new(vec![]));
        assert!(tiles_for_geometry(&empty, 3)?.is_empty());
        Ok(())
    }
}
