//! Logging setup
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: standard filter directives (default: `fontsubset=error`)
//! - `FONTSUBSET_LOG_FORMAT`: `json` or `pretty` (default: `pretty`)
//!
//! Logs go to stderr so they never interleave with the report on stdout.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "fontsubset=error";

pub fn init_logging() -> Result<()> {
    let log_format =
        std::env::var("FONTSUBSET_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    match log_format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
