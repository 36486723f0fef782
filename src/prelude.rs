//! Bistro prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amounts::{format_amount, format_money, from_major, to_major},
    bill::{Bill, BillLine, BillSummary, PricingError, recompute_bill},
    catalog::{
        Catalog, CatalogError, house_menu,
        loader::{MenuFileError, load_menu, parse_menu},
    },
    customer::{Customer, validate_contact_keystroke},
    finalize::{ValidationError, finalize},
    menu::{Category, MenuItem, MenuItemKey},
    quantity::parse_quantity,
    records::{RecordsError, past_records},
    selections::{Selections, reset_selections},
    session::{Session, SessionError, SessionState},
    tax::{DEFAULT_TAX_LABEL, TaxRate, TaxRateError},
    terminal::{Command, CommandError, Flow, Terminal, write_menu},
};
