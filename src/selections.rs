//! Selections

use rustc_hash::FxHashMap;
use tracing::info;

use crate::quantity::parse_quantity;

/// Raw quantity input per menu item name.
///
/// Values are stored exactly as typed and only normalised when a bill is
/// computed, so a half-typed entry never disturbs the field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    entries: FxHashMap<String, String>,
}

impl Selections {
    /// Create an empty set of selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the raw quantity typed for an item. Empty input removes the entry.
    pub fn set(&mut self, item: impl Into<String>, raw: impl Into<String>) {
        let item = item.into();
        let raw = raw.into();

        if raw.is_empty() {
            self.entries.remove(&item);
        } else {
            self.entries.insert(item, raw);
        }
    }

    /// The raw text entered for an item, if any.
    pub fn raw(&self, item: &str) -> Option<&str> {
        self.entries.get(item).map(String::as_str)
    }

    /// The normalised quantity for an item; zero when absent or malformed.
    pub fn quantity(&self, item: &str) -> u32 {
        self.raw(item).map_or(0, parse_quantity)
    }

    /// Iterate over the raw entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(item, raw)| (item.as_str(), raw.as_str()))
    }

    /// Get the number of raw entries, including malformed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selections = Self::new();

        for (item, raw) in iter {
            selections.set(item, raw);
        }

        selections
    }
}

/// Clears every quantity. Customer details are kept.
pub fn reset_selections(selections: &mut Selections) {
    info!(cleared = selections.len(), "clearing selections");

    selections.clear();
}
