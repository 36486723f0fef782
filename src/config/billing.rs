//! Billing Config

use std::path::PathBuf;

use clap::Args;
use rusty_money::{Findable, iso::Currency};

use bistro::{
    catalog::{
        Catalog, house_menu,
        loader::{MenuFileError, load_menu},
    },
    tax::{DEFAULT_TAX_LABEL, TaxRate},
};

/// Menu and tax settings.
#[derive(Debug, Args)]
pub(crate) struct BillingConfig {
    /// Tax rate in percent applied to every bill
    #[arg(long, env = "BISTRO_TAX_RATE", default_value = "18", global = true)]
    pub(crate) tax_rate: TaxRate,

    /// Name printed next to the tax line
    #[arg(long, env = "BISTRO_TAX_LABEL", default_value = DEFAULT_TAX_LABEL, global = true)]
    pub(crate) tax_label: String,

    /// Currency for the built-in menu (ISO code)
    #[arg(long, env = "BISTRO_CURRENCY", default_value = "GBP", global = true)]
    pub(crate) currency: String,

    /// YAML menu file to use instead of the built-in menu
    #[arg(long, env = "BISTRO_MENU", global = true)]
    pub(crate) menu: Option<PathBuf>,
}

impl BillingConfig {
    /// Build the catalog: the menu file if one is configured, the house menu otherwise.
    pub(crate) fn load_catalog(&self) -> Result<Catalog<'static>, MenuFileError> {
        if let Some(path) = &self.menu {
            return load_menu(path);
        }

        let currency = Currency::find(self.currency.trim())
            .ok_or_else(|| MenuFileError::UnknownCurrency(self.currency.clone()))?;

        Ok(house_menu(currency)?)
    }
}
