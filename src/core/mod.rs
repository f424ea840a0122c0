pub mod constants;
pub mod geometry;
pub mod math;

pub use constants::{MAX_LAT, MAX_LNG, MERCATOR_LAT_LIMIT, MIN_LAT, MIN_LNG};
pub use geometry::create_box;
pub use math::{degree_to_rad, rad_to_degree, tile_count, tile_lat_at_y, tile_lng_at_x};
