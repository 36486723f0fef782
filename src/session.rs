//! Session
//!
//! The state of one customer interaction at the counter: who the bill is for
//! and what has been typed into each quantity field. The front end owns the
//! session and the pricing functions only ever borrow it.

use thiserror::Error;
use tracing::debug;

use crate::{
    bill::{Bill, PricingError, recompute_bill},
    catalog::Catalog,
    customer::Customer,
    finalize::{ValidationError, finalize},
    selections::{Selections, reset_selections},
    tax::TaxRate,
};

/// Errors raised while finalising a session.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// The input is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The bill could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Where the interaction is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing entered yet
    #[default]
    Idle,

    /// Details being entered; the bill is recomputed after every change
    Selecting,

    /// The bill was accepted and is fixed until the next change
    Finalized,
}

/// One customer interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    customer: Customer,
    selections: Selections,
    state: SessionState,
}

impl Session {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current customer details
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Current raw quantities
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Replace the customer name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.customer.set_name(name);
        self.touch();
    }

    /// Propose a new contact value. Returns `false` if it was rejected.
    pub fn set_contact(&mut self, proposed: impl Into<String>) -> bool {
        let accepted = self.customer.set_contact(proposed);

        if accepted {
            self.touch();
        }

        accepted
    }

    /// Record the raw quantity typed for an item.
    pub fn set_quantity(&mut self, item: impl Into<String>, raw: impl Into<String>) {
        self.selections.set(item, raw);
        self.touch();
    }

    /// Clear every quantity; the customer details stay.
    pub fn reset_selections(&mut self) {
        reset_selections(&mut self.selections);
        self.touch();
    }

    /// Clear everything, ready for the next customer.
    pub fn next_customer(&mut self) {
        *self = Self::new();
    }

    /// The live bill for the current input.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if money arithmetic overflows.
    pub fn preview<'a>(
        &self,
        catalog: &Catalog<'a>,
        tax_rate: TaxRate,
    ) -> Result<Bill<'a>, PricingError> {
        recompute_bill(catalog, &self.selections, &self.customer, tax_rate)
    }

    /// Recompute the bill and finalise it.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the input is incomplete or the bill cannot be priced.
    pub fn finalize<'a>(
        &mut self,
        catalog: &Catalog<'a>,
        tax_rate: TaxRate,
    ) -> Result<Bill<'a>, SessionError> {
        let bill = self.preview(catalog, tax_rate)?;
        let bill = finalize(&self.customer, bill)?;

        self.state = SessionState::Finalized;

        Ok(bill)
    }

    fn touch(&mut self) {
        let next = if !self.customer.has_name()
            && self.customer.contact().is_empty()
            && self.selections.is_empty()
        {
            SessionState::Idle
        } else {
            SessionState::Selecting
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "session state changed");
        }

        self.state = next;
    }
}
