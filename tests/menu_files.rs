//! Loading catalogs from YAML menu files.

use std::{io::Write, path::Path};

use rust_decimal::Decimal;
use rusty_money::iso::{GBP, JPY};
use testresult::TestResult;

use bistro::prelude::*;

#[test]
fn bundled_house_menu_matches_built_in_menu() -> TestResult {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("menus/house.yaml");
    let from_file = load_menu(path)?;
    let built_in = house_menu(GBP)?;

    let from_file: Vec<_> = from_file
        .iter()
        .map(|item| (item.name.clone(), item.price, item.category))
        .collect();

    let built_in: Vec<_> = built_in
        .iter()
        .map(|item| (item.name.clone(), item.price, item.category))
        .collect();

    assert_eq!(from_file, built_in);

    Ok(())
}

#[test]
fn menu_in_zero_exponent_currency() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;

    writeln!(
        file,
        "currency: JPY\nappetizers:\n  - name: Edamame\n    price: 450\nmain_courses:\n  - name: Ramen\n    price: \"1200\""
    )?;

    let catalog = load_menu(file.path())?;
    let selections: Selections = [("Edamame", "2"), ("Ramen", "1")].into_iter().collect();

    let tax_rate = TaxRate::new(Decimal::from(10))?;
    let bill = recompute_bill(&catalog, &selections, &Customer::default(), tax_rate)?;

    assert_eq!(catalog.currency(), JPY);
    assert_eq!(bill.subtotal().to_minor_units(), 2100);
    assert_eq!(bill.grand_total(), Decimal::from(2310));

    Ok(())
}

#[test]
fn fractional_yen_is_rejected() {
    let result = parse_menu("currency: JPY\ndesserts:\n  - name: Mochi\n    price: \"1.5\"");

    assert!(
        matches!(result, Err(MenuFileError::InvalidPrice(name, _)) if name == "Mochi"),
        "fractional yen should be rejected"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_menu("/nonexistent/bistro/menu.yaml");

    assert!(
        matches!(result, Err(MenuFileError::Io(_))),
        "expected an IO error"
    );
}

#[test]
fn subtotal_beyond_minor_unit_range_is_an_error() -> TestResult {
    let catalog = parse_menu(
        "currency: GBP\nmain_courses:\n  - name: Gold Leaf Steak\n    price: \"46116860184273879.03\"\n  - name: Truffle Risotto\n    price: \"46116860184273879.03\"",
    )?;
    let selections: Selections = [("Gold Leaf Steak", "1"), ("Truffle Risotto", "2")]
        .into_iter()
        .collect();

    let result = recompute_bill(&catalog, &selections, &Customer::default(), TaxRate::STANDARD);

    assert_eq!(result, Err(PricingError::SubtotalOverflow));

    Ok(())
}
