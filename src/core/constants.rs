/// Valid longitude range in degrees
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// Valid latitude range in degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Latitude limit used when clamping bounding boxes before tile enumeration
pub const MERCATOR_LAT_LIMIT: f64 = 85.0;
