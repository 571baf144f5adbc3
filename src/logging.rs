use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. The level is taken from
/// `RUST_LOG` and defaults to `info`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))
}
