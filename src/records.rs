//! Past records
//!
//! Bills are not stored anywhere, so there is nothing to look back at yet.

use thiserror::Error;

/// Errors returned by the past-records lookup.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecordsError {
    /// Record keeping does not exist.
    #[error("This feature is not yet implemented.")]
    NotAvailable,
}

/// Looks up previously finalised bills. Always reports [`RecordsError::NotAvailable`].
///
/// # Errors
///
/// Always returns [`RecordsError::NotAvailable`].
pub fn past_records() -> Result<(), RecordsError> {
    Err(RecordsError::NotAvailable)
}
