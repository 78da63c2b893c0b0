//! Checkout board — the device table with its renew lookup.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use devicenanny_app::ports::CheckoutRepository;
use devicenanny_domain::style::StyledRow;

use crate::error::DashboardError;
use crate::state::AppState;

/// Shown instead of the table when the store could not be queried.
pub struct QueryFailure {
    /// Raw storage error, only when the settings expose it.
    detail: Option<String>,
}

/// Board page template.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    refresh_seconds: u32,
    users_url: String,
    rows: Vec<StyledRow>,
    failure: Option<QueryFailure>,
}

impl BoardTemplate {
    fn into_html(self, status: StatusCode) -> Result<Response, DashboardError> {
        let body = self.render()?;
        Ok((status, Html(body)).into_response())
    }
}

/// `GET /` — every lab device, colour-coded.
///
/// A store failure still renders the page shell (lookup forms, refresh) with
/// a failure line in place of the table, under a `500` status.
pub async fn index<CR>(State(state): State<AppState<CR>>) -> Result<Response, DashboardError>
where
    CR: CheckoutRepository + Send + Sync + 'static,
{
    let settings = &state.settings;

    let (status, rows, failure) = match state.checkout_service.board().await {
        Ok(rows) => (StatusCode::OK, rows, None),
        Err(err) => {
            let detail = err.detail();
            tracing::error!(error = %detail, "couldn't issue database query");
            let failure = QueryFailure {
                detail: settings.show_error_details.then_some(detail),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Vec::new(), Some(failure))
        }
    };

    BoardTemplate {
        refresh_seconds: settings.refresh_seconds,
        users_url: settings.users_url.clone(),
        rows,
        failure,
    }
    .into_html(status)
}
