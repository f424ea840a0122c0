use crate::api::bbox::{BoundingBox, tiles_for_bounds};
use crate::api::point::Point;
use crate::api::tile::Tile;
use crate::util::error::TboxError;
use geo_types::{Polygon, Rect};
use geojson::{Feature, FeatureCollection, JsonObject};
use rayon::prelude::*;
use serde_json::json;

/// The ordered set of tiles covering a bounding box at one zoom level.
///
/// # Example
///
/// ```
/// use tbox_rs::{BoundingBox, Point, TileGrid};
///
/// # fn main() -> Result<(), tbox_rs::TboxError> {
/// let grid = TileGrid::builder()
///     .zoom_level(7)
///     .bounds(BoundingBox::new(10.045, 51.2114, 13.825, 53.575))
///     .build()?;
///
/// assert_eq!(grid.len(), 4);
/// if let Some(tile) = grid.get_tile_at(&Point::new(13.37, 52.52)) {
///     println!("{}", tile);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    zoom_level: u8,
}

impl TileGrid {
    pub fn builder() -> TileGridBuilder {
        TileGridBuilder::new()
    }

    pub fn from_bounds(bbox: &BoundingBox, zoom_level: u8) -> Result<Self, TboxError> {
        let tiles = tiles_for_bounds(bbox, zoom_level)?;
        Ok(Self { tiles, zoom_level })
    }

    pub fn from_rect(rect: &Rect<f64>, zoom_level: u8) -> Result<Self, TboxError> {
        Self::from_bounds(&BoundingBox::from_rect(rect), zoom_level)
    }

    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Returns the grid tile the point falls in, if any.
    pub fn get_tile_at(&self, point: &Point) -> Option<&Tile> {
        let target = point.to_tile(self.zoom_level).ok()?;
        self.tiles.iter().find(|tile| **tile == target)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Tile>
    where
        F: Fn(&Tile) -> bool,
    {
        self.tiles.iter().filter(|tile| predicate(tile)).collect()
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.tiles.par_iter().map(|tile| tile.to_polygon()).collect()
    }

    /// Converts the grid to a GeoJSON FeatureCollection, one polygon per tile
    /// with `z`, `x` and `y` properties.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .tiles
            .iter()
            .zip(self.to_polygons())
            .map(|(tile, polygon)| {
                let mut properties = JsonObject::new();
                properties.insert("z".to_string(), json!(tile.z));
                properties.insert("x".to_string(), json!(tile.x));
                properties.insert("y".to_string(), json!(tile.y));

                Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::from(&polygon))),
                    id: Some(geojson::feature::Id::String(tile.to_string())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[derive(Debug, Default)]
pub struct TileGridBuilder {
    zoom_level: Option<u8>,
    bounds: Option<BoundingBox>,
}

impl TileGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_level(mut self, zoom_level: u8) -> Self {
        self.zoom_level = Some(zoom_level);
        self
    }

    pub fn bounds(mut self, bbox: BoundingBox) -> Self {
        self.bounds = Some(bbox);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.bounds = Some(BoundingBox::from_rect(rect));
        self
    }

    pub fn build(self) -> Result<TileGrid, TboxError> {
        let zoom_level = self
            .zoom_level
            .ok_or_else(|| TboxError::InvalidConfig("zoom_level must be set".to_string()))?;
        let bounds = self
            .bounds
            .ok_or_else(|| TboxError::InvalidConfig("bounds must be set".to_string()))?;

        TileGrid::from_bounds(&bounds, zoom_level)
    }
}
