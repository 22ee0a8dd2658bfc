use crate::domain::{GeoPoint, ObserverLocation};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for ObserverLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            country: String,
            region: String,
            city: String,
        }

        let inner = Inner::deserialize(deserializer)?;
        let point = GeoPoint::new(inner.latitude, inner.longitude).map_err(Error::custom)?;

        Ok(ObserverLocation {
            point,
            country: inner.country,
            region: inner.region,
            city: inner.city,
        })
    }
}
