//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`NannyError`]
//! via `From`, so services and handlers only ever match on this enum.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum NannyError {
    /// The backing store failed to answer.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl NannyError {
    /// Render the error and every source below it as a single line,
    /// outermost first (`storage error: database error: no such table`).
    #[must_use]
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = err.source();
        }
        detail
    }
}
