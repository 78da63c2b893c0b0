//! Renew lookup — forwards the typed user id to the renewal page.

use axum::extract::{Query, State};
use axum::response::Redirect;

use devicenanny_app::ports::CheckoutRepository;
use devicenanny_domain::renewal::RenewalRequest;

use crate::error::DashboardError;
use crate::state::AppState;

/// Build `<renew_url>?userID=<user_id>`, percent-encoding the id.
///
/// # Errors
///
/// Returns [`DashboardError::Encode`] if the query string cannot be encoded.
pub fn renewal_location(renew_url: &str, user_id: &str) -> Result<String, DashboardError> {
    let query = serde_urlencoded::to_string(&[("userID", user_id)])?;
    Ok(format!("{renew_url}?{query}"))
}

/// `GET /renew?primary=..&secondary=..` — `303` to the renewal page.
pub async fn redirect<CR>(
    State(state): State<AppState<CR>>,
    Query(request): Query<RenewalRequest>,
) -> Result<Redirect, DashboardError>
where
    CR: CheckoutRepository + Send + Sync + 'static,
{
    let user_id = request.resolve();
    tracing::debug!(user_id = %user_id, "renewal lookup");
    let location = renewal_location(&state.settings.renew_url, &user_id)?;
    Ok(Redirect::to(&location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_empty_user_id_parameter() {
        let location = renewal_location("renew.php", "").unwrap();
        assert_eq!(location, "renew.php?userID=");
    }

    #[test]
    fn should_append_user_id() {
        let location = renewal_location("renew.php", "42").unwrap();
        assert_eq!(location, "renew.php?userID=42");
    }

    #[test]
    fn should_percent_encode_user_id() {
        let location = renewal_location("/renew.php", "a&b").unwrap();
        assert_eq!(location, "/renew.php?userID=a%26b");
    }
}
