//! Spherical-Mercator projection (EPSG:4326 → EPSG:3857).

/// WGS84 semi-major axis in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the Mercator projection, in degrees.
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_78;

/// Half the projected world width, in meters.
pub const HALF_WORLD_M: f64 = EARTH_RADIUS_M * std::f64::consts::PI;

/// A point in projected (Mercator) coordinates, meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Easting in meters.
    pub x: f64,
    /// Northing in meters.
    pub y: f64,
}

/// A point in viewport coordinates, pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Project a geographic `[lon, lat]` pair to Mercator meters.
///
/// Latitude is clamped to the projection limit so polar coordinates cannot
/// produce infinities.
#[must_use]
pub fn from_lon_lat(lon_deg: f64, lat_deg: f64) -> Point {
    let lat = lat_deg.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG).to_radians();
    Point {
        x: EARTH_RADIUS_M * lon_deg.to_radians(),
        y: EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
    }
}

/// Inverse projection back to `(lon, lat)` degrees.
#[must_use]
pub fn to_lon_lat(point: Point) -> (f64, f64) {
    let lon = (point.x / EARTH_RADIUS_M).to_degrees();
    let lat =
        (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees();
    (lon, lat)
}

/// Squared distance from a point to a segment, in the same units.
#[must_use]
pub fn segment_distance_sq(p: Pixel, a: Pixel, b: Pixel) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx.mul_add(abx, aby * aby);
    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let cx = t.mul_add(abx, a.x);
    let cy = t.mul_add(aby, a.y);
    let dx = p.x - cx;
    let dy = p.y - cy;
    dx.mul_add(dx, dy * dy)
}
