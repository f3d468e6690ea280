use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use tracing::debug;

use crate::error::{CollectError, Result};
use crate::nature_remo::{Device, DeviceReading, decode_devices, first_device_reading};

pub const DEFAULT_BASE_URL: &str = "https://api.nature.global";

const DEVICES_PATH: &str = "/1/devices";

/// Anything that can report the newest readings of the polled device.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    async fn latest_reading(&self, access_key: &str) -> Result<DeviceReading>;
}

#[derive(Debug, Clone)]
pub struct NatureRemoClient {
    http: Client,
    base_url: String,
}

impl NatureRemoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn devices_url(&self) -> String {
        format!("{}{DEVICES_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub async fn list_devices(&self, access_key: &str) -> Result<Vec<Device>> {
        let url = self.devices_url();

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(access_key)
            .send()
            .await
            .map_err(|source| CollectError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| CollectError::Network {
                url: url.clone(),
                source,
            })?;

        debug!(%url, %status, bytes = body.len(), "received device list");

        decode_devices(status, &body)
    }
}

impl Default for NatureRemoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl DeviceSource for NatureRemoClient {
    async fn latest_reading(&self, access_key: &str) -> Result<DeviceReading> {
        let devices = self.list_devices(access_key).await?;
        first_device_reading(devices)
    }
}
