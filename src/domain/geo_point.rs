use thiserror::Error;

/// Latitude/longitude pair in degrees. Values outside the valid ranges
/// cannot be constructed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::InvalidLatitude(latitude));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::InvalidLongitude(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoPointError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}
