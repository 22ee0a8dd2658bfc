mod distance;
mod geo_point;
mod observer_location;
mod phone_report;

pub use distance::Distance;
pub use geo_point::{GeoPoint, GeoPointError};
pub use observer_location::ObserverLocation;
pub use phone_report::PhoneReport;
