use crate::domain::GeoPoint;

/// Where the operator of the tool is sitting, resolved over geo-IP or
/// taken from the configured fallback.
#[derive(Clone, PartialEq, Debug)]
pub struct ObserverLocation {
    pub point: GeoPoint,
    pub country: String,
    pub region: String,
    pub city: String,
}
