use crate::domain::ObserverLocation;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    locate: Locate,
    phone: Phone,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn locate(&self) -> &Locate {
        &self.locate
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }
}

#[derive(Debug, Deserialize)]
pub struct Locate {
    url: String,
    timeout_ms: u64,
    retry_ms: u64,
    retries: usize,
    fallback: ObserverLocation,
}

impl Locate {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retries(&self) -> usize {
        self.retries
    }

    pub fn fallback(&self) -> &ObserverLocation {
        &self.fallback
    }
}

#[derive(Debug, Deserialize)]
pub struct Phone {
    default_region: Option<String>,
}

impl Phone {
    pub fn default_region(&self) -> Option<&str> {
        self.default_region.as_deref()
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        use crate::domain::GeoPoint;

        AppConfigBuilder {
            config: AppConfig {
                locate: Locate {
                    url: "http://ip-api.com/json".to_string(),
                    timeout_ms: 5_000,
                    retry_ms: 1,
                    retries: 2,
                    fallback: ObserverLocation {
                        point: GeoPoint::new(4.6097, -74.0817).unwrap(),
                        country: "Colombia".to_string(),
                        region: "Bogotá".to_string(),
                        city: "Bogotá".to_string(),
                    },
                },
                phone: Phone { default_region: None },
            },
        }
    }

    pub fn locate_url(mut self, url: String) -> Self {
        self.config.locate.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
