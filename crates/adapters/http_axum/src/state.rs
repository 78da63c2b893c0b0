//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use devicenanny_app::ports::CheckoutRepository;
use devicenanny_app::services::checkout_service::CheckoutService;

/// Presentation settings of the checkout board.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Seconds between automatic page reloads.
    pub refresh_seconds: u32,
    /// Print the raw storage error under the failure line.
    pub show_error_details: bool,
    /// External renewal page; receives `?userID=<value>`.
    pub renew_url: String,
    /// External user listing page.
    pub users_url: String,
    /// Directory served for `/style.css` and other assets.
    pub assets_dir: Option<PathBuf>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_seconds: 15,
            show_error_details: false,
            renew_url: "renew.php".to_string(),
            users_url: "/users.php".to_string(),
            assets_dir: None,
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the checkout repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<CR> {
    /// Checkout board service.
    pub checkout_service: Arc<CheckoutService<CR>>,
    /// Board presentation settings.
    pub settings: Arc<DashboardSettings>,
}

impl<CR> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            checkout_service: Arc::clone(&self.checkout_service),
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<CR> AppState<CR>
where
    CR: CheckoutRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and its settings.
    pub fn new(checkout_service: CheckoutService<CR>, settings: DashboardSettings) -> Self {
        Self {
            checkout_service: Arc::new(checkout_service),
            settings: Arc::new(settings),
        }
    }
}
