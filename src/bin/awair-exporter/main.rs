mod args;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use args::Args;
use awair_exporter::{exporter::AwairExporter, logging, server};
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    logging::init().context("failed to initialize logging")?;

    let exporter = AwairExporter::connect(
        &args.hostname,
        Duration::from_secs(args.fetch_timeout_secs),
    )
    .await
    .context("failed to connect to Awair device")?;

    server::serve(Arc::new(exporter), args.listen_address).await
}
