//! # tbox-rs
//!
//! Slippy-map tile math for spherical Web Mercator: convert between lng/lat
//! points, `z/x/y` tiles and bounding boxes.
//!
//! ### 1. `Point` and `Tile` - Single Tile Operations
//!
//! ```
//! use tbox_rs::{Point, Tile};
//!
//! # fn main() -> Result<(), tbox_rs::TboxError> {
//! let tile = Point::new(-87.65, 41.84).to_tile(11)?;
//! println!("{}", tile); // 11/525/761
//!
//! let bbox = tile.to_box();
//! let center = tile.center();
//! let parent = tile.parent();
//! let children = tile.children();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `tiles_for_bounds` / `TileGrid` - Covering a Bounding Box
//!
//! Boxes with `min_lng > max_lng` cross the antimeridian:
//!
//! ```
//! use tbox_rs::{BoundingBox, TileGrid, tiles_for_bounds};
//!
//! # fn main() -> Result<(), tbox_rs::TboxError> {
//! let bering = BoundingBox::new(178.65, 70.81, -177.58, 71.6);
//! assert_eq!(tiles_for_bounds(&bering, 7)?.len(), 4);
//!
//! let grid = TileGrid::from_bounds(&bering, 7)?;
//! let geojson = grid.to_feature_collection().to_string();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `tiles_for_geometry` - Covering a Geometry
//!
//! ```
//! use tbox_rs::tiles_for_geometry;
//! use geo_types::{Geometry, line_string};
//!
//! # fn main() -> Result<(), tbox_rs::TboxError> {
//! let route = Geometry::LineString(line_string![
//!     (x: 10.045, y: 51.2114),
//!     (x: 13.825, y: 53.575),
//! ]);
//! assert_eq!(tiles_for_geometry(&route, 7)?.len(), 4);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BoundingBox, Point, Tile, TileGrid, TileGridBuilder, tiles_for_bounds, tiles_for_geometry,
};
pub use crate::core::{
    MAX_LAT, MAX_LNG, MERCATOR_LAT_LIMIT, MIN_LAT, MIN_LNG, degree_to_rad, rad_to_degree,
    tile_count, tile_lat_at_y, tile_lng_at_x,
};
pub use util::{Coordinate, TboxError};

pub use geo_types;
pub use geojson;
