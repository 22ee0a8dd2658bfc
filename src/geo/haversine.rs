use crate::domain::{Distance, GeoPoint};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points using the haversine formula
/// on a spherical Earth.
pub fn distance(a: GeoPoint, b: GeoPoint) -> Distance {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h past 1 for antipodal points, which would turn the asin into a NaN
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    Distance::from_kilometers(EARTH_RADIUS_KM * c)
}
