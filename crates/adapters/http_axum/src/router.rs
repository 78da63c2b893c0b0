//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use devicenanny_app::ports::CheckoutRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the board and renew lookup at `/`, falls back to the configured
/// assets directory (for `style.css`) when one is set, and includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<CR>(state: AppState<CR>) -> Router
where
    CR: CheckoutRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes());

    let router = match &state.settings.assets_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
