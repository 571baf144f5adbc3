use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use prometheus::{Encoder as _, TextEncoder};
use tracing::{error, info};
use warp::Filter as _;

use crate::awair::DeviceClient;
use crate::exporter::AwairExporter;

const INDEX_PAGE: &str = "<html>\
<head><title>Awair Exporter</title></head>\
<body><h1>Awair Exporter</h1><p><a href=\"/metrics\">Metrics</a></p></body>\
</html>";

/// Serves the exporter until the process is terminated. Every request to
/// `/metrics` triggers one collection cycle against the device.
pub async fn serve<C>(exporter: Arc<AwairExporter<C>>, addr: SocketAddr) -> Result<()>
where
    C: DeviceClient + 'static,
{
    let with_exporter = warp::any().map(move || Arc::clone(&exporter));

    let metrics = warp::path("metrics")
        .and(warp::get())
        .and(with_exporter)
        .then(|exporter: Arc<AwairExporter<C>>| async move { render_metrics(&exporter).await });

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_PAGE));

    let routes = metrics.or(index);

    let (bound, server) = warp::serve(routes)
        .try_bind_ephemeral(addr)
        .context("failed to bind listen address")?;
    info!(address = %bound, "serving metrics");

    server.await;

    Ok(())
}

async fn render_metrics<C: DeviceClient>(exporter: &AwairExporter<C>) -> impl warp::Reply + use<C> {
    exporter.collect().await;

    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(err) = encoder.encode(&exporter.gather(), &mut buf) {
        error!(error = %err, "failed to encode metrics");
    }

    warp::reply::with_header(
        String::from_utf8(buf).unwrap_or_default(),
        "Content-Type",
        encoder.format_type(),
    )
}
