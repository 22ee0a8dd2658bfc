use crate::app_config::AppConfig;
use crate::domain::{GeoPoint, GeoPointError, ObserverLocation};
use crate::locate::domain::geo_ip_response::GeoIpResponse;
use reqwest::Client;
use thiserror::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

/// Resolves where the operator is sitting via the configured geo-IP
/// endpoint. Best effort: any failure degrades to the configured fallback.
#[instrument(skip_all)]
pub async fn observe(client: &Client, config: &AppConfig) -> ObserverLocation {
    info!("Resolving observer location...");

    let strategy = ExponentialBackoff::from_millis(config.locate().retry_ms())
        .factor(2)
        .map(jitter)
        .take(config.locate().retries());

    match Retry::spawn(strategy, || fetch(client, config.locate().url())).await {
        Ok(location) => {
            info!("Resolving observer location... OK, {}, {}", location.city, location.country);
            location
        }
        Err(e) => {
            warn!("⚠️ Could not resolve observer location: {}. Using the configured fallback", e);
            config.locate().fallback().clone()
        }
    }
}

#[instrument(skip(client), fields(url = %url))]
async fn fetch(client: &Client, url: &str) -> Result<ObserverLocation, LocateError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let payload = response.json::<GeoIpResponse>().await?;

    to_location(payload)
}

fn to_location(response: GeoIpResponse) -> Result<ObserverLocation, LocateError> {
    if response.status != "success" {
        return Err(LocateError::Unsuccessful(
            response.message.unwrap_or_else(|| "no reason given".to_string()),
        ));
    }

    let (Some(lat), Some(lon)) = (response.lat, response.lon) else {
        return Err(LocateError::MissingCoordinates);
    };

    Ok(ObserverLocation {
        point: GeoPoint::new(lat, lon)?,
        country: response.country.unwrap_or_else(|| "Unknown".to_string()),
        region: response.region_name.unwrap_or_else(|| "Unknown".to_string()),
        city: response.city.unwrap_or_else(|| "Unknown".to_string()),
    })
}

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geo-ip lookup failed: {0}")]
    Unsuccessful(String),
    #[error("geo-ip response carries no coordinates")]
    MissingCoordinates,
    #[error(transparent)]
    InvalidCoordinate(#[from] GeoPointError),
}
