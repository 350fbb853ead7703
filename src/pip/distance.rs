//! Great-circle distance on a spherical earth.

use geo::Coord;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Widest longitude offset a circle grid may span on either side of its
/// center.
pub const MAX_LONGITUDE_OFFSET: f64 = 180.0;

/// Haversine distance between two `[lon, lat]` points, in kilometres.
///
/// Uses the `atan2` form, which stays well-defined for antipodal points where
/// the `asin` form can see its argument drift above 1.
pub fn haversine_distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (lat1, lat2) = (a.y.to_radians(), b.y.to_radians());
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn point_in_circle(p: Coord<f64>, center: Coord<f64>, radius_km: f64) -> bool {
    haversine_distance_km(p, center) <= radius_km
}

/// Equirectangular conversion of a distance to `(d_lon, d_lat)` degrees
/// around `center_lat`.
///
/// The longitude offset is `d_lat / cos(center_lat)`, capped at
/// [`MAX_LONGITUDE_OFFSET`] where the cosine vanishes near the poles.
pub fn km_to_degree_offsets(center_lat: f64, km: f64, km_per_degree: f64) -> (f64, f64) {
    let d_lat = km / km_per_degree;
    let d_lon = (d_lat / center_lat.to_radians().cos()).abs();
    (d_lon.min(MAX_LONGITUDE_OFFSET), d_lat)
}
