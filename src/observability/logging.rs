//! Logging subscriber initialisation.

use std::io;

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::ObservabilityError;

/// Install the global subscriber. Logs go to stderr so stdout stays free for bills.
pub(crate) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_writer(io::stderr),
        ),
    }
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config))
        .try_init()?;

    Ok(())
}
