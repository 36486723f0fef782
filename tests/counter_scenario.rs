//! End-to-end billing at the counter using the house menu.
//!
//! A customer orders two portions of Nachos and one Steak Diane:
//!
//! - Nachos: 2 x £5 = £10
//! - Steak Diane: 1 x £30 = £30
//! - Subtotal: £40
//! - GST at 18%: £7.20
//! - Total: £47.20

use rust_decimal::Decimal;
use rusty_money::iso::GBP;
use testresult::TestResult;

use bistro::prelude::*;

#[test]
fn nachos_and_steak_for_asha() -> TestResult {
    let catalog = house_menu(GBP)?;
    let mut session = Session::new();

    session.set_name("Asha");
    assert!(session.set_contact("9998887776"), "digits should be accepted");
    session.set_quantity("Nachos", "2");
    session.set_quantity("Steak Diane", "1");

    let bill = session.finalize(&catalog, TaxRate::STANDARD)?;

    assert_eq!(bill.subtotal().to_minor_units(), 4000);
    assert_eq!(bill.tax(), Decimal::new(72, 1));
    assert_eq!(bill.grand_total(), Decimal::new(472, 1));

    let expected = "Customer Name: Asha\n\
                    Customer Contact: 9998887776\n\
                    \n\
                    Selected Items:\n\
                    Nachos x 2 - £10\n\
                    Steak Diane x 1 - £30\n\
                    \n\
                    Total Price: £40\n\
                    GST (18%): £7.2\n\
                    Total Amount: £47.2";

    assert_eq!(bill.summary(DEFAULT_TAX_LABEL).to_string(), expected);
    assert_eq!(session.state(), SessionState::Finalized);

    Ok(())
}

#[test]
fn malformed_quantity_only_is_an_empty_selection() -> TestResult {
    let catalog = house_menu(GBP)?;
    let mut session = Session::new();

    session.set_name("Asha");
    session.set_quantity("Nachos", "abc");

    assert_eq!(
        session.finalize(&catalog, TaxRate::STANDARD),
        Err(SessionError::Validation(ValidationError::EmptySelection))
    );

    Ok(())
}

#[test]
fn whitespace_name_is_missing() -> TestResult {
    let catalog = house_menu(GBP)?;
    let mut session = Session::new();

    session.set_name("   ");
    session.set_quantity("Ice Cream", "1");

    assert_eq!(
        session.finalize(&catalog, TaxRate::STANDARD),
        Err(SessionError::Validation(ValidationError::MissingCustomerName))
    );

    Ok(())
}

#[test]
fn reset_then_bill_is_zero() -> TestResult {
    let catalog = house_menu(GBP)?;
    let mut session = Session::new();

    session.set_name("Asha");
    session.set_quantity("Crab Cakes", "3");
    session.set_quantity("Chocolate Cake", "2");
    session.reset_selections();

    let bill = session.preview(&catalog, TaxRate::STANDARD)?;

    assert!(bill.is_empty(), "reset should drop every line");
    assert_eq!(bill.tax(), Decimal::ZERO);
    assert_eq!(bill.grand_total(), Decimal::ZERO);
    assert_eq!(session.customer().name(), "Asha");

    Ok(())
}

#[test]
fn lines_follow_menu_order_not_entry_order() -> TestResult {
    let catalog = house_menu(GBP)?;
    let selections: Selections = [
        ("Cookies and Cream", "1"),
        ("Pan-Seared Salmon", "1"),
        ("French Fries", "4"),
    ]
    .into_iter()
    .collect();

    let bill = recompute_bill(&catalog, &selections, &Customer::default(), TaxRate::STANDARD)?;
    let names: Vec<&str> = bill.lines().iter().map(|line| line.name.as_str()).collect();

    assert_eq!(names, ["French Fries", "Pan-Seared Salmon", "Cookies and Cream"]);
    assert_eq!(bill.subtotal().to_minor_units(), 2000 + 2500 + 1200);

    Ok(())
}

#[test]
fn terminal_session_end_to_end() -> TestResult {
    let catalog = house_menu(GBP)?;
    let mut terminal = Terminal::new(&catalog, TaxRate::STANDARD, "GST");
    let mut out = Vec::new();

    terminal.run(
        "name Asha\ncontact 9998887776\nqty Nachos = 2\nqty Steak Diane = 1\nbill\nquit\n"
            .as_bytes(),
        &mut out,
    )?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Bill finalised."), "bill was not finalised: {output}");
    assert!(output.contains("£47.2"), "missing grand total: {output}");
    assert_eq!(terminal.session().state(), SessionState::Finalized);

    Ok(())
}
