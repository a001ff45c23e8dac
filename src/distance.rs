use crate::location::Coordinate;

/// Radius of the sphere the distances are measured on, in km.
pub const EARTH_RADIUS_KM: f64 = 6400.0;

/// Great-circle distance in km between two coordinates (haversine).
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lon2 = b.lon.to_radians();

    let h = ((lat1 - lat2) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon1 - lon2) / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
