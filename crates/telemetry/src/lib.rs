pub mod make_span;
pub mod request_id;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt,
    util::SubscriberInitExt, util::TryInitError,
};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter directive: {0}")]
    InvalidFilter(#[from] ParseError),
    #[error("failed to install global subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Output format of the fmt layer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// An [`EnvFilter`] directive, e.g. `info,airport_service=debug`.
    pub level: String,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info,airport_service=debug".to_string(),
            format: Format::default(),
        }
    }
}

/// Installs the global tracing subscriber and routes panics through it.
///
/// Must be called at most once per process.
pub fn init_telemetry(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        Format::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        Format::Compact => registry.with(fmt::layer().compact()).try_init()?,
        Format::Json => registry.with(fmt::layer().json()).try_init()?,
    }
    log_panics::init();
    Ok(())
}
