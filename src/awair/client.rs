use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::awair::{DeviceConfig, Readings};

const READINGS_PATH: &str = "/air-data/latest";
const CONFIG_PATH: &str = "/settings/config/data";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only access to the two resources the device exposes. Both calls are
/// independent and safe to issue concurrently against the same host.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    async fn readings(&self) -> Result<Readings, ClientError>;

    async fn configuration(&self) -> Result<DeviceConfig, ClientError>;
}

/// Client for the local HTTP API of an Awair device. Single attempt per
/// call, no retries; every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    host: String,
}

impl HttpClient {
    pub fn new(host: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            host: host.to_owned(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("http://{}{}", self.host, path);
        debug!(%url, "requesting resource from Awair device");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DeviceClient for HttpClient {
    async fn readings(&self) -> Result<Readings, ClientError> {
        self.get_json(READINGS_PATH).await
    }

    async fn configuration(&self) -> Result<DeviceConfig, ClientError> {
        self.get_json(CONFIG_PATH).await
    }
}
