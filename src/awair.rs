mod client;
mod config;
mod readings;

pub use client::*;
pub use config::*;
pub use readings::*;
