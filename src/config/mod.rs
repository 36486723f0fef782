//! Command-line configuration

use clap::{Args, Parser, Subcommand};

use crate::config::{billing::BillingConfig, observability::LoggingConfig};

pub(crate) mod billing;
pub(crate) mod observability;

/// Bistro restaurant billing
#[derive(Debug, Parser)]
#[command(name = "bistro", about = "Restaurant billing at the counter", long_about = None, version)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Menu and tax settings.
    #[command(flatten)]
    pub(crate) billing: BillingConfig,

    /// What to do; defaults to an interactive session.
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the menu grouped by category
    Menu,

    /// Price one bill from the command line and finalise it
    Bill(BillArgs),

    /// Run an interactive billing session on stdin
    Session,

    /// Look up past bills
    Records,
}

/// Arguments for a one-shot bill.
#[derive(Debug, Args)]
pub(crate) struct BillArgs {
    /// Customer name
    #[arg(short, long, default_value = "")]
    pub(crate) name: String,

    /// Customer contact number (digits only)
    #[arg(short, long, default_value = "")]
    pub(crate) contact: String,

    /// Item quantity as `ITEM=QTY`; repeat for more items
    #[arg(short, long = "select", value_name = "ITEM=QTY", value_parser = parse_selection)]
    pub(crate) selections: Vec<(String, String)>,

    /// Render the lines as a table
    #[arg(long)]
    pub(crate) table: bool,
}

fn parse_selection(raw: &str) -> Result<(String, String), String> {
    let (item, quantity) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ITEM=QTY, got `{raw}`"))?;

    let item = item.trim();

    if item.is_empty() {
        return Err(format!("missing item name in `{raw}`"));
    }

    Ok((item.to_string(), quantity.trim().to_string()))
}
