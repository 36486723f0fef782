//! Logging Config

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub(crate) log_format: LogFormat,
}
