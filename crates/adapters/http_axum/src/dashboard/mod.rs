//! Server-side rendered HTML board (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod board;
#[allow(clippy::missing_errors_doc)]
pub mod renew;

use axum::Router;
use axum::routing::get;

use devicenanny_app::ports::CheckoutRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<CR>() -> Router<AppState<CR>>
where
    CR: CheckoutRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(board::index::<CR>))
        .route("/renew", get(renew::redirect::<CR>))
}
