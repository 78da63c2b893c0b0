//! Renewal lookup — picks the user id to renew from the board's two inputs.

use serde::Deserialize;

/// The two "User ID" inputs of the board, above and below the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenewalRequest {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
}

impl RenewalRequest {
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// The top input when it holds anything, otherwise the bottom one
    /// (possibly empty). The value is not validated.
    #[must_use]
    pub fn resolve(self) -> String {
        if self.primary.is_empty() {
            self.secondary
        } else {
            self.primary
        }
    }
}
