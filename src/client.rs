use std::time::Duration;

use crate::error::CollectError;
use crate::sensor::RawReport;

/// Transport seam between the collection loop and the sensor fleet.
#[allow(async_fn_in_trait)]
pub trait SensorClient {
    async fn fetch(&self, address: &str) -> Result<RawReport, CollectError>;
}

/// Fetches reports over plain HTTP: `GET http://<address>/`, body parsed
/// as JSON. No authentication, no query parameters.
pub struct HttpSensorClient {
    client: reqwest::Client,
}

impl HttpSensorClient {
    /// The per-request timeout bounds how long one slow device can delay
    /// the rest of the list.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl SensorClient for HttpSensorClient {
    async fn fetch(&self, address: &str) -> Result<RawReport, CollectError> {
        let url = format!("http://{address}/");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CollectError::Http {
                address: address.to_string(),
                source: source.into(),
            })?;

        let body = response
            .text()
            .await
            .map_err(|source| CollectError::Http {
                address: address.to_string(),
                source: source.into(),
            })?;

        serde_json::from_str(&body).map_err(|source| CollectError::Parse {
            address: address.to_string(),
            source,
        })
    }
}
