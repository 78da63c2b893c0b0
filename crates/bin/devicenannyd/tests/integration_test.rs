//! End-to-end smoke tests for the full devicenannyd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use devicenanny_adapter_http_axum::router;
use devicenanny_adapter_http_axum::state::{AppState, DashboardSettings};
use devicenanny_adapter_storage_sqlite_sqlx::{Config, SqliteCheckoutRepository};
use devicenanny_app::services::checkout_service::CheckoutService;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied.
async fn database() -> SqlitePool {
    Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise")
    .pool()
    .clone()
}

/// Build a fully-wired router over `pool`.
fn app(pool: SqlitePool, settings: DashboardSettings) -> axum::Router {
    let state = AppState::new(
        CheckoutService::new(SqliteCheckoutRepository::new(pool)),
        settings,
    );
    router::build(state)
}

async fn seed(pool: &SqlitePool) {
    for (id, first, last) in [("12", "Grace", "Hopper"), ("5", "Ada", "Lovelace")] {
        sqlx::query("INSERT INTO Users (UserID, FirstName, LastName) VALUES (?, ?, ?)")
            .bind(id)
            .bind(first)
            .bind(last)
            .execute(pool)
            .await
            .unwrap();
    }

    let devices = [
        ("iPad-1", "Apple", "A1893", "Phone", "iOS 12", "Omaha", "0"),
        ("Galaxy-4", "Samsung", "SM-T830", "Tablet", "Android 8", "Lincoln", "12"),
        ("Pixel-3", "Google", "G013A", "Phone", "Android 9", "Omaha", "5"),
        ("Lost-1", "Motorola", "XT1", "Phone", "Android 7", "Omaha", "77"),
    ];
    for (name, manufacturer, model, device_type, os, location, holder) in devices {
        sqlx::query(
            "INSERT INTO Devices (DeviceName, Manufacturer, Model, Type, OS, Location, CheckedOutBy) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(manufacturer)
        .bind(model)
        .bind(device_type)
        .bind(os)
        .bind(location)
        .bind(holder)
        .execute(pool)
        .await
        .unwrap();
    }
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(resp: axum::http::Response<Body>) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = get(app(database().await, DashboardSettings::default()), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Checkout board
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_empty_board_on_fresh_database() {
    let resp = get(app(database().await, DashboardSettings::default()), "/").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Device Nanny"));
    assert!(body.contains("<tbody>"));
    assert_eq!(body.matches("<tr class=\"checkout-row\">").count(), 0);
}

#[tokio::test]
async fn should_render_every_device_in_query_order() {
    let pool = database().await;
    seed(&pool).await;

    let resp = get(app(pool, DashboardSettings::default()), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;

    assert_eq!(body.matches("<tr class=\"checkout-row\">").count(), 4);
    let position = |needle: &str| body.find(needle).unwrap();
    // holder 0 < 5 < 12 < 77
    assert!(position("iPad-1") < position("Pixel-3"));
    assert!(position("Pixel-3") < position("Galaxy-4"));
    assert!(position("Galaxy-4") < position("Lost-1"));
}

#[tokio::test]
async fn should_show_available_device_with_placeholder_name() {
    let pool = database().await;
    seed(&pool).await;

    let body = body_text(get(app(pool, DashboardSettings::default()), "/").await).await;

    assert!(body.contains("<td style=\"background-color: #a9c94d;\">iPad-1</td>"));
    assert!(body.contains("<td style=\"background-color: #007cb5;\">Apple</td>"));
    assert!(body.contains("<td>- -</td>"));
}

#[tokio::test]
async fn should_show_holder_name_for_checked_out_device() {
    let pool = database().await;
    seed(&pool).await;

    let body = body_text(get(app(pool, DashboardSettings::default()), "/").await).await;

    assert!(body.contains("<td style=\"background-color: #ff523d;\">Galaxy-4</td>"));
    assert!(body.contains("<td>Grace Hopper</td>"));
    assert!(body.contains("<td>Ada Lovelace</td>"));
    assert!(body.contains("<td style=\"background-color: transparent;\">Lincoln</td>"));
}

#[tokio::test]
async fn should_list_device_held_by_unknown_user() {
    let pool = database().await;
    seed(&pool).await;

    let body = body_text(get(app(pool, DashboardSettings::default()), "/").await).await;

    assert!(body.contains("<td style=\"background-color: #ff523d;\">Lost-1</td>"));
    assert_eq!(body.matches("<td>- -</td>").count(), 2);
}

#[tokio::test]
async fn should_render_failure_line_without_table_when_query_fails() {
    let pool = database().await;
    sqlx::query("DROP TABLE Devices")
        .execute(&pool)
        .await
        .unwrap();

    let resp = get(app(pool, DashboardSettings::default()), "/").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(resp).await;

    assert!(body.contains("Couldn't issue database query"));
    assert!(!body.contains("no such table"));
    assert!(!body.contains("<tbody>"));
    assert!(body.contains("Renew Checkout(s)"));
}

#[tokio::test]
async fn should_include_raw_database_error_when_details_enabled() {
    let pool = database().await;
    sqlx::query("DROP TABLE Devices")
        .execute(&pool)
        .await
        .unwrap();
    let settings = DashboardSettings {
        show_error_details: true,
        ..DashboardSettings::default()
    };

    let body = body_text(get(app(pool, settings), "/").await).await;

    assert!(body.contains("Couldn't issue database query"));
    assert!(body.contains("no such table: Devices"));
    assert!(!body.contains("<tbody>"));
}

// ---------------------------------------------------------------------------
// Renew lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_redirect_to_renewal_page_with_empty_user_id() {
    let resp = get(
        app(database().await, DashboardSettings::default()),
        "/renew?primary=&secondary=",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "renew.php?userID=");
}

#[tokio::test]
async fn should_redirect_with_whichever_input_is_filled() {
    let resp = get(
        app(database().await, DashboardSettings::default()),
        "/renew?primary=&secondary=12",
    )
    .await;
    assert_eq!(resp.headers()[header::LOCATION], "renew.php?userID=12");

    let resp = get(
        app(database().await, DashboardSettings::default()),
        "/renew?primary=5&secondary=12",
    )
    .await;
    assert_eq!(resp.headers()[header::LOCATION], "renew.php?userID=5");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let resp = get(
        app(database().await, DashboardSettings::default()),
        "/nonexistent",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
