//! Bill

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    amounts::to_major, catalog::Catalog, customer::Customer, selections::Selections,
    tax::TaxRate,
};

mod render;

pub use render::BillSummary;

/// Errors that can occur while pricing a bill.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line total does not fit in minor units (item, quantity).
    #[error("line total for {0} x {1} is out of range")]
    LineOverflow(String, u32),

    /// The sum of the line totals does not fit in minor units.
    #[error("bill subtotal is out of range")]
    SubtotalOverflow,

    /// The tax or grand total does not fit in a decimal amount.
    #[error("tax at {0} on this bill is out of range")]
    TaxOverflow(TaxRate),
}

/// A single priced line on a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine<'a> {
    /// Menu item name
    pub name: String,

    /// Number of portions, always above zero
    pub quantity: u32,

    /// Price of one portion
    pub unit_price: Money<'a, Currency>,

    /// `unit_price * quantity`
    pub line_total: Money<'a, Currency>,
}

/// A bill derived from the catalog, the current selections and the tax rate.
///
/// Bills are recomputed on demand and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill<'a> {
    customer: Customer,
    lines: SmallVec<[BillLine<'a>; 8]>,
    subtotal: Money<'a, Currency>,
    tax_rate: TaxRate,

    /// Exact, unrounded major units
    tax: Decimal,

    /// Exact, unrounded major units
    grand_total: Decimal,
}

impl<'a> Bill<'a> {
    /// Customer the bill is made out to
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Lines in catalog display order
    pub fn lines(&self) -> &[BillLine<'a>] {
        &self.lines
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// The rate the tax was computed with
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Tax on the subtotal, in major units
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Subtotal plus tax, in major units
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// Currency used for all monetary values
    pub fn currency(&self) -> &Currency {
        self.subtotal.currency()
    }

    /// Whether any item has a positive quantity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Prices the current selections against the catalog.
///
/// Lines follow catalog display order. Quantities are normalised with
/// [`parse_quantity`](crate::quantity::parse_quantity), so malformed input
/// simply leaves an item off the bill. Selections naming unknown items are
/// ignored.
///
/// # Errors
///
/// Returns a [`PricingError`] only if money arithmetic overflows.
pub fn recompute_bill<'a>(
    catalog: &Catalog<'a>,
    selections: &Selections,
    customer: &Customer,
    tax_rate: TaxRate,
) -> Result<Bill<'a>, PricingError> {
    let currency = catalog.currency();
    let mut lines: SmallVec<[BillLine<'a>; 8]> = SmallVec::new();

    for item in catalog.iter() {
        let quantity = selections.quantity(&item.name);

        if quantity == 0 {
            continue;
        }

        let line_minor = item
            .price
            .to_minor_units()
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| PricingError::LineOverflow(item.name.clone(), quantity))?;

        lines.push(BillLine {
            name: item.name.clone(),
            quantity,
            unit_price: item.price,
            line_total: Money::from_minor(line_minor, currency),
        });
    }

    for (name, _) in selections.iter().filter(|(name, _)| !catalog.contains(name)) {
        debug!(%name, "ignoring selection for unknown item");
    }

    let subtotal_minor = lines
        .iter()
        .try_fold(0_i64, |acc, line| acc.checked_add(line.line_total.to_minor_units()))
        .ok_or(PricingError::SubtotalOverflow)?;

    let subtotal = Money::from_minor(subtotal_minor, currency);
    let subtotal_major = to_major(&subtotal);

    let (tax, grand_total) = tax_rate
        .tax_on(subtotal_major)
        .and_then(|tax| Some((tax, subtotal_major.checked_add(tax)?)))
        .ok_or(PricingError::TaxOverflow(tax_rate))?;

    debug!(
        lines = lines.len(),
        subtotal = %subtotal_major,
        %tax,
        %grand_total,
        "recomputed bill"
    );

    Ok(Bill {
        customer: customer.clone(),
        lines,
        subtotal,
        tax_rate,
        tax,
        grand_total,
    })
}
