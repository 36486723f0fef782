//! Finalisation

use thiserror::Error;
use tracing::info;

use crate::{bill::Bill, customer::Customer};

/// Reasons a bill cannot be finalised. Both are fixed by correcting input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The customer name is empty or whitespace.
    #[error("Please enter the customer name.")]
    MissingCustomerName,

    /// No item has a positive quantity.
    #[error("Please select at least one item.")]
    EmptySelection,
}

/// Checks that a bill may be handed to the customer and returns it unchanged.
///
/// # Errors
///
/// - [`ValidationError::MissingCustomerName`]: checked first, regardless of selections.
/// - [`ValidationError::EmptySelection`]: the bill has no lines.
pub fn finalize<'a>(customer: &Customer, bill: Bill<'a>) -> Result<Bill<'a>, ValidationError> {
    if !customer.has_name() {
        return Err(ValidationError::MissingCustomerName);
    }

    if bill.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    info!(
        customer = customer.name().trim(),
        lines = bill.lines().len(),
        grand_total = %bill.grand_total(),
        "finalized bill"
    );

    Ok(bill)
}
