//! Prometheus exporter for the Awair local sensor API.

pub mod awair;
pub mod exporter;
pub mod logging;
pub mod metrics;
pub mod server;
