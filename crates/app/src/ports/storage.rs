//! Storage port — read access to the device lab store.

use std::future::Future;

use devicenanny_domain::checkout::CheckoutRow;
use devicenanny_domain::error::NannyError;

/// Read-only access to devices joined with the users holding them.
pub trait CheckoutRepository {
    /// Every device with its holder, ordered by holder, type, OS (descending),
    /// manufacturer and model.
    ///
    /// Devices whose holder matches no user are included with the
    /// placeholder full name.
    fn list_checkouts(&self)
    -> impl Future<Output = Result<Vec<CheckoutRow>, NannyError>> + Send;
}
