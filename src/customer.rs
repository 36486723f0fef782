//! Customers

use tracing::warn;

/// The customer a bill is made out to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    name: String,
    contact: String,
}

impl Customer {
    /// Creates a customer. The contact is kept only if it passes
    /// [`validate_contact_keystroke`], otherwise it is left empty.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        let mut customer = Self {
            name: name.into(),
            contact: String::new(),
        };

        customer.set_contact(contact);
        customer
    }

    /// Customer name, exactly as entered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact number, digits only
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Replace the customer name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the contact number if the proposed value is digits only.
    ///
    /// Returns `false` and keeps the previous value when the proposal is rejected.
    pub fn set_contact(&mut self, proposed: impl Into<String>) -> bool {
        let proposed = proposed.into();

        if !validate_contact_keystroke(&proposed) {
            warn!(%proposed, "rejected non-numeric contact input");

            return false;
        }

        self.contact = proposed;

        true
    }

    /// Whether the name is present once surrounding whitespace is removed.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Checks a proposed contact value after a keystroke.
///
/// Accepts the empty string or ASCII decimal digits only.
pub fn validate_contact_keystroke(proposed: &str) -> bool {
    proposed.chars().all(|ch| ch.is_ascii_digit())
}
