//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::menu::{Category, MenuItem, MenuItemKey};

mod house;
pub mod loader;

pub use house::house_menu;

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Another item already uses this name.
    #[error("duplicate menu item name: {0}")]
    DuplicateName(String),

    /// The item name is empty or whitespace.
    #[error("menu item name cannot be empty")]
    EmptyName,

    /// The item price is below zero.
    #[error("menu item {0} has a negative price")]
    NegativePrice(String),

    /// The item price does not fit in minor units.
    #[error("menu item {0} has a price that is out of range")]
    PriceOutOfRange(String),

    /// An item's currency differs from the catalog currency (item, item currency, catalog currency).
    #[error("menu item {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// The fixed set of purchasable items, grouped by category for display.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    items: SlotMap<MenuItemKey, MenuItem<'a>>,
    names: FxHashMap<String, MenuItemKey>,

    /// Keys sorted by category, then insertion order within the category
    display_order: Vec<MenuItemKey>,

    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: SlotMap::with_key(),
            names: FxHashMap::default(),
            display_order: Vec::new(),
            currency,
        }
    }

    /// Create a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] raised by [`Catalog::insert`].
    pub fn with_items(
        currency: &'static Currency,
        items: impl IntoIterator<Item = MenuItem<'a>>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for item in items {
            catalog.insert(item)?;
        }

        Ok(catalog)
    }

    /// Add an item to the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyName`]: the name is blank.
    /// - [`CatalogError::DuplicateName`]: an item with this name already exists.
    /// - [`CatalogError::CurrencyMismatch`]: the price is not in the catalog currency.
    /// - [`CatalogError::NegativePrice`]: the price is below zero.
    pub fn insert(&mut self, item: MenuItem<'a>) -> Result<MenuItemKey, CatalogError> {
        if item.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if self.names.contains_key(&item.name) {
            return Err(CatalogError::DuplicateName(item.name));
        }

        let item_currency = item.price.currency();

        if item_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                item.name,
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if item.price.to_minor_units() < 0 {
            return Err(CatalogError::NegativePrice(item.name));
        }

        let category = item.category;
        let position = self.display_order.partition_point(|key| {
            self.items
                .get(*key)
                .is_some_and(|existing| existing.category <= category)
        });

        debug!(name = %item.name, ?category, "adding menu item");

        let name = item.name.clone();
        let key = self.items.insert(item);

        self.names.insert(name, key);
        self.display_order.insert(position, key);

        Ok(key)
    }

    /// Get an item by key.
    pub fn get(&self, key: MenuItemKey) -> Option<&MenuItem<'a>> {
        self.items.get(key)
    }

    /// Find an item by its exact name.
    pub fn find(&self, name: &str) -> Option<&MenuItem<'a>> {
        self.names.get(name).and_then(|key| self.items.get(*key))
    }

    /// Check whether an item with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Iterate over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem<'a>> {
        self.display_order
            .iter()
            .filter_map(|key| self.items.get(*key))
    }

    /// Iterate over the items of one category in display order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &MenuItem<'a>> {
        self.iter().filter(move |item| item.category == category)
    }

    /// Get the number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
