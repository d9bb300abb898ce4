//! Logging configuration and setup
//!
//! This module initializes the tracing subscriber for the ShadowKZ
//! configuration check. `RUST_LOG` takes precedence over the default
//! filter derived from the debug flag.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::errors::Result;

/// Initialize logging; the debug flag widens the default filter
pub fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    info!("Logging initialized with level: {}", default_level);
    Ok(())
}
