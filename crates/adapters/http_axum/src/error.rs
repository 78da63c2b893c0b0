//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures of the dashboard handlers themselves (not of the store, which the
/// board renders in-page).
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The askama template failed to render.
    #[error("template rendering failed")]
    Render(#[from] askama::Error),

    /// A redirect query string could not be encoded.
    #[error("query string encoding failed")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "dashboard error");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
