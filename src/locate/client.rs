use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, LocateClientError> {
    let client = Client::builder().timeout(config.locate().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum LocateClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
