//! The restaurant's built-in menu.

use rusty_money::iso::Currency;

use crate::{
    amounts::from_major,
    catalog::{Catalog, CatalogError},
    menu::{Category, MenuItem},
};

const HOUSE_MENU: [(&str, i64, Category); 15] = [
    ("Nachos", 5, Category::Appetizer),
    ("French Fries", 5, Category::Appetizer),
    ("Buffalo chicken wings", 7, Category::Appetizer),
    ("Potato Skins", 7, Category::Appetizer),
    ("Crab Cakes", 6, Category::Appetizer),
    ("Honey Garlic Chicken", 20, Category::MainCourse),
    ("Pan-Seared Salmon", 25, Category::MainCourse),
    ("Lemon Chicken Pasta", 24, Category::MainCourse),
    ("Steak Diane", 30, Category::MainCourse),
    ("Creamy Chicken Noodle Soup", 32, Category::MainCourse),
    ("Cheesy Brownie", 10, Category::Dessert),
    ("Chocolate Cake", 12, Category::Dessert),
    ("Ice Cream", 5, Category::Dessert),
    ("Italian Tiramisu", 11, Category::Dessert),
    ("Cookies and Cream", 12, Category::Dessert),
];

/// Builds the house menu, with whole-unit prices in the given currency.
///
/// # Errors
///
/// Returns [`CatalogError::PriceOutOfRange`] if a price does not fit in the
/// currency's minor units.
pub fn house_menu(currency: &'static Currency) -> Result<Catalog<'static>, CatalogError> {
    let mut catalog = Catalog::new(currency);

    for (name, major, category) in HOUSE_MENU {
        let price =
            from_major(major, currency).ok_or_else(|| CatalogError::PriceOutOfRange(name.into()))?;

        catalog.insert(MenuItem::new(name, price, category))?;
    }

    Ok(catalog)
}
