//! Menu items

use std::fmt;

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Menu Item Key
    pub struct MenuItemKey;
}

/// Menu section. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Starters
    Appetizer,

    /// Mains
    MainCourse,

    /// Desserts
    Dessert,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Appetizer, Category::MainCourse, Category::Dessert];

    /// Heading used when listing the menu.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizers",
            Category::MainCourse => "Main Courses",
            Category::Dessert => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<'a> {
    /// Item name, unique across the catalog
    pub name: String,

    /// Price of a single portion
    pub price: Money<'a, Currency>,

    /// Menu section
    pub category: Category,
}

impl<'a> MenuItem<'a> {
    /// Creates a new menu item.
    pub fn new(name: impl Into<String>, price: Money<'a, Currency>, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }
}
