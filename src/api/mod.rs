pub mod bbox;
pub mod point;
pub mod tile;
pub mod tile_grid;

pub use bbox::{BoundingBox, tiles_for_bounds, tiles_for_geometry};
pub use point::Point;
pub use tile::Tile;
pub use tile_grid::{TileGrid, TileGridBuilder};
