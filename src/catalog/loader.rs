//! Menu files
//!
//! Loads a catalog from YAML:
//!
//! ```yaml
//! currency: GBP
//! appetizers:
//!   - name: Nachos
//!     price: 5
//! main_courses:
//!   - name: Steak Diane
//!     price: "30.50"
//! desserts: []
//! ```

use std::{fmt, fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Findable, Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{Catalog, CatalogError},
    menu::{Category, MenuItem},
};

/// Menu file errors
#[derive(Debug, Error)]
pub enum MenuFileError {
    /// IO error reading the menu file
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price for {0}: {1}")]
    InvalidPrice(String, String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The items could not form a valid catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Menu file contents
#[derive(Debug, Deserialize)]
pub struct MenuFile {
    /// ISO currency code shared by every price
    pub currency: String,

    /// Appetizers, in display order
    #[serde(default)]
    pub appetizers: Vec<MenuEntry>,

    /// Main courses, in display order
    #[serde(default)]
    pub main_courses: Vec<MenuEntry>,

    /// Desserts, in display order
    #[serde(default)]
    pub desserts: Vec<MenuEntry>,
}

/// A single menu file entry
#[derive(Debug, Deserialize)]
pub struct MenuEntry {
    /// Item name
    pub name: String,

    /// Price in major units
    pub price: PriceValue,
}

/// A price written either as a bare integer or as a decimal string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    /// Whole major units, e.g. `5`
    Whole(u64),

    /// Decimal major units, e.g. `"5.50"`
    Text(String),
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceValue::Whole(value) => write!(f, "{value}"),
            PriceValue::Text(value) => f.write_str(value),
        }
    }
}

impl MenuFile {
    /// Build a catalog from the parsed file.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown currencies, unparseable prices or invalid catalog items.
    pub fn into_catalog(self) -> Result<Catalog<'static>, MenuFileError> {
        let currency = Currency::find(self.currency.trim())
            .ok_or_else(|| MenuFileError::UnknownCurrency(self.currency.clone()))?;

        let mut catalog = Catalog::new(currency);

        let sections = [
            (Category::Appetizer, self.appetizers),
            (Category::MainCourse, self.main_courses),
            (Category::Dessert, self.desserts),
        ];

        for (category, entries) in sections {
            for entry in entries {
                let minor_units = parse_price(&entry.price, currency).ok_or_else(|| {
                    MenuFileError::InvalidPrice(entry.name.clone(), entry.price.to_string())
                })?;

                catalog.insert(MenuItem::new(
                    entry.name,
                    Money::from_minor(minor_units, currency),
                    category,
                ))?;
            }
        }

        Ok(catalog)
    }
}

/// Parse a major-unit price into minor units of the given currency.
///
/// Returns `None` for non-numeric, negative, overly precise or out-of-range values.
pub fn parse_price(price: &PriceValue, currency: &Currency) -> Option<i64> {
    let amount = match price {
        PriceValue::Whole(value) => Decimal::from(*value),
        PriceValue::Text(value) => value.trim().parse::<Decimal>().ok()?,
    };

    if amount.is_sign_negative() || amount.scale() > currency.exponent {
        return None;
    }

    amount
        .checked_mul(Decimal::from(10_i64.checked_pow(currency.exponent)?))
        .and_then(|minor| minor.to_i64())
}

/// Parse a catalog from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or describes an invalid catalog.
pub fn parse_menu(contents: &str) -> Result<Catalog<'static>, MenuFileError> {
    let file: MenuFile = serde_norway::from_str(contents)?;

    file.into_catalog()
}

/// Load a catalog from a YAML file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Catalog<'static>, MenuFileError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let catalog = parse_menu(&contents)?;

    info!(path = %path.display(), items = catalog.len(), "loaded menu file");

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rusty_money::iso::{GBP, JPY};
    use testresult::TestResult;

    use super::*;

    const MENU: &str = r#"
currency: GBP
desserts:
  - name: Ice Cream
    price: 5
appetizers:
  - name: Nachos
    price: "5.50"
  - name: Crab Cakes
    price: 6
"#;

    #[test]
    fn parse_menu_builds_catalog_in_section_order() -> TestResult {
        let catalog = parse_menu(MENU)?;

        let names: Vec<&str> = catalog.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, vec!["Nachos", "Crab Cakes", "Ice Cream"]);
        assert_eq!(catalog.currency(), GBP);
        assert_eq!(
            catalog.find("Nachos").map(|item| item.price.to_minor_units()),
            Some(550)
        );

        Ok(())
    }

    #[test]
    fn parse_menu_rejects_unknown_currency() {
        let result = parse_menu("currency: ABC\n");

        assert!(matches!(result, Err(MenuFileError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_menu_rejects_duplicate_names() {
        let yaml = "currency: GBP\nappetizers:\n  - name: Nachos\n    price: 5\ndesserts:\n  - name: Nachos\n    price: 6\n";

        assert!(matches!(
            parse_menu(yaml),
            Err(MenuFileError::Catalog(CatalogError::DuplicateName(name))) if name == "Nachos"
        ));
    }

    #[test]
    fn parse_menu_rejects_bad_price() {
        let yaml = "currency: GBP\nappetizers:\n  - name: Nachos\n    price: five\n";

        assert!(matches!(
            parse_menu(yaml),
            Err(MenuFileError::InvalidPrice(name, price)) if name == "Nachos" && price == "five"
        ));
    }

    #[test]
    fn parse_menu_rejects_malformed_yaml() {
        assert!(matches!(parse_menu("currency: [GBP"), Err(MenuFileError::Yaml(_))));
    }

    #[test]
    fn parse_price_rejects_negative_and_overly_precise_values() {
        assert_eq!(parse_price(&PriceValue::Text("-1".into()), GBP), None);
        assert_eq!(parse_price(&PriceValue::Text("1.005".into()), GBP), None);
        assert_eq!(parse_price(&PriceValue::Text("1.5".into()), JPY), None);
        assert_eq!(parse_price(&PriceValue::Whole(300), JPY), Some(300));
        assert_eq!(parse_price(&PriceValue::Text(" 2.99 ".into()), GBP), Some(299));
    }

    #[test]
    fn load_menu_reads_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(MENU.as_bytes())?;

        let catalog = load_menu(file.path())?;

        assert_eq!(catalog.len(), 3);

        Ok(())
    }

    #[test]
    fn load_menu_missing_file_is_io_error() {
        let result = load_menu("/definitely/not/a/menu.yml");

        assert!(matches!(result, Err(MenuFileError::Io(_))));
    }
}
