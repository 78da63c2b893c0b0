//! Checkout service — use-cases behind the checkout board.

use devicenanny_domain::error::NannyError;
use devicenanny_domain::style::{StyledRow, style_row};

use crate::ports::CheckoutRepository;

/// Application service reading the device lab for display.
pub struct CheckoutService<R> {
    repo: R,
}

impl<R: CheckoutRepository> CheckoutService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Build the colour-coded board: one styled line per device, same order
    /// as the repository returned them.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn board(&self) -> Result<Vec<StyledRow>, NannyError> {
        let rows = self.repo.list_checkouts().await?;
        tracing::debug!(rows = rows.len(), "loaded checkouts");
        Ok(rows.iter().map(style_row).collect())
    }
}
