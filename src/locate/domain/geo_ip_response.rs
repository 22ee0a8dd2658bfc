use serde::Deserialize;

// API: https://ip-api.com/docs/api:json
#[derive(Debug, Deserialize)]
pub struct GeoIpResponse {
    pub status: String, // "success" or "fail"
    pub message: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
