use crate::domain::GeoPoint;

/// Everything the analyzer could establish about a number. Format fields
/// are only present for valid numbers.
#[derive(PartialEq, Debug)]
pub struct PhoneReport {
    pub raw: String,
    pub valid: bool,
    pub country_code: u32,
    pub national_number: u64,
    pub region: Option<String>,
    pub e164: Option<String>,
    pub national: Option<String>,
    pub international: Option<String>,
    pub rfc3966: Option<String>,
    pub centroid: Option<GeoPoint>,
}
