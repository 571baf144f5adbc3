use std::time::Duration;

use anyhow::{Context as _, Result};
use prometheus::Registry;
use prometheus::core::Desc;
use prometheus::proto::MetricFamily;
use tracing::{debug, error, info};

use crate::awair::{DeviceClient, HttpClient};
use crate::metrics::DeviceMetrics;

/// Pulls readings and configuration from one Awair device and records them
/// into a fixed set of gauge families.
pub struct AwairExporter<C = HttpClient> {
    client: C,
    metrics: DeviceMetrics,
    registry: Registry,
}

impl AwairExporter<HttpClient> {
    pub async fn connect(hostname: &str, timeout: Duration) -> Result<Self> {
        let client =
            HttpClient::new(hostname, timeout).context("failed to build Awair device client")?;

        Self::with_client(client).await
    }
}

impl<C: DeviceClient> AwairExporter<C> {
    /// Builds the exporter, fetching the device configuration once up front.
    /// An unreachable device fails construction.
    pub async fn with_client(client: C) -> Result<Self> {
        let config = client
            .configuration()
            .await
            .context("failed to fetch configuration from Awair device")?;
        info!(?config, "successfully connected to Awair device");

        let metrics = DeviceMetrics::new().context("failed to build metric families")?;
        let registry = Registry::new();
        metrics
            .register(&registry)
            .context("failed to register metric families")?;

        Ok(Self {
            client,
            metrics,
            registry,
        })
    }

    /// Runs one collection cycle: both resources are fetched concurrently,
    /// and the cycle waits for both before recording. A failed fetch is
    /// logged and recorded as its zero-valued default; collection itself
    /// never fails.
    pub async fn collect(&self) {
        let (readings, config) =
            tokio::join!(self.client.readings(), self.client.configuration());

        let readings = match readings {
            Ok(readings) => {
                debug!(?readings, "retrieved readings from Awair device");
                Some(readings)
            }
            Err(err) => {
                error!(error = %err, "failed to retrieve readings from Awair device");
                None
            }
        };

        let config = match config {
            Ok(config) => {
                debug!(?config, "retrieved configuration from Awair device");
                Some(config)
            }
            Err(err) => {
                error!(error = %err, "failed to retrieve configuration from Awair device");
                None
            }
        };

        self.metrics.record(readings.as_ref(), config.as_ref());
    }

    pub fn describe(&self) -> Vec<&Desc> {
        self.metrics.describe()
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }
}
