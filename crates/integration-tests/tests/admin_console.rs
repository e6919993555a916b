//! Integration tests for the admin console form flows.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The web server running (cargo run -p laundrypro-web) with known
//!   `ADMIN_EMAIL` / `ADMIN_PASSWORD`
//!
//! Run with: cargo test -p laundrypro-integration-tests -- --ignored

use reqwest::{Client, StatusCode, redirect::Policy};
use serde_json::{Value, json};

use laundrypro_integration_tests::{admin_credentials, base_url};

/// Client that keeps cookies but does not follow redirects, so tests can
/// assert on the redirect targets the form flows produce.
fn admin_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

async fn admin_login(client: &Client, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/admin/login", base_url()))
        .form(&[("adminEmail", email), ("adminPassword", password)])
        .send()
        .await
        .expect("admin login request failed")
}

fn location(resp: &reqwest::Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Create a booking through the public API and return its order id.
async fn create_booking(client: &Client) -> i64 {
    let resp = client
        .post(format!("{}/api/bookings", base_url()))
        .json(&json!({
            "serviceType": "ironing",
            "items": 2,
            "pickupDate": "2025-06-05",
            "pickupTime": "11:00",
            "address": "3 Temple Street",
            "phone": "9876500000",
            "paymentMethod": "card",
        }))
        .send()
        .await
        .expect("create booking request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("invalid JSON");
    body["orderId"].as_i64().expect("missing orderId")
}

async fn fetch_status(client: &Client, order_id: i64) -> String {
    let resp = client
        .get(format!("{}/api/bookings/{order_id}", base_url()))
        .send()
        .await
        .expect("get booking request failed");
    let body: Value = resp.json().await.expect("invalid JSON");
    body["status"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_admin_login_redirects_to_dashboard() {
    let client = admin_client();
    let (email, password) = admin_credentials();

    let resp = admin_login(&client, &email, &password).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/admin/dashboard");

    let dashboard = client
        .get(format!("{}/admin/dashboard", base_url()))
        .send()
        .await
        .expect("dashboard request failed");
    assert_eq!(dashboard.status(), StatusCode::OK);
    let html = dashboard.text().await.expect("dashboard body");
    assert!(html.contains("Admin Dashboard"));
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_bad_admin_credentials_bounce_home_with_warning() {
    let client = admin_client();

    let resp = admin_login(&client, "admin@laundrypro.com", "definitely-wrong").await;
    assert!(resp.status().is_redirection());
    assert!(location(&resp).starts_with("/?error="));
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_dashboard_without_marker_redirects_home() {
    let client = admin_client();

    let resp = client
        .get(format!("{}/admin/dashboard", base_url()))
        .send()
        .await
        .expect("dashboard request failed");
    assert!(resp.status().is_redirection());
    assert!(location(&resp).starts_with("/?warning="));
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_status_may_move_backward() {
    let client = admin_client();
    let (email, password) = admin_credentials();
    admin_login(&client, &email, &password).await;

    let order_id = create_booking(&client).await;

    for status in ["IN_PROCESS", "PICKED_UP"] {
        let resp = client
            .post(format!("{}/admin/bookings/{order_id}/status", base_url()))
            .form(&[("status", status)])
            .send()
            .await
            .expect("status update request failed");
        assert!(resp.status().is_redirection());
        assert!(location(&resp).contains("notice="));
    }

    // No forward-only enforcement: the final status is the backward one
    assert_eq!(fetch_status(&client, order_id).await, "PICKED_UP");
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_bogus_status_rejected_and_unchanged() {
    let client = admin_client();
    let (email, password) = admin_credentials();
    admin_login(&client, &email, &password).await;

    let order_id = create_booking(&client).await;

    let resp = client
        .post(format!("{}/admin/bookings/{order_id}/status", base_url()))
        .form(&[("status", "BOGUS")])
        .send()
        .await
        .expect("status update request failed");
    assert!(resp.status().is_redirection());
    assert!(location(&resp).contains("error="));

    assert_eq!(fetch_status(&client, order_id).await, "PICKED_UP");
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_status_update_for_missing_booking_flashes_error() {
    let client = admin_client();
    let (email, password) = admin_credentials();
    admin_login(&client, &email, &password).await;

    let resp = client
        .post(format!("{}/admin/bookings/999999999/status", base_url()))
        .form(&[("status", "DELIVERED")])
        .send()
        .await
        .expect("status update request failed");
    assert!(resp.status().is_redirection());
    assert!(location(&resp).contains("error="));
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_admin_logout_clears_marker() {
    let client = admin_client();
    let (email, password) = admin_credentials();
    admin_login(&client, &email, &password).await;

    let resp = client
        .get(format!("{}/admin/logout", base_url()))
        .send()
        .await
        .expect("logout request failed");
    assert!(resp.status().is_redirection());
    assert!(location(&resp).starts_with("/?notice="));

    // Marker gone: the dashboard bounces back home
    let resp = client
        .get(format!("{}/admin/dashboard", base_url()))
        .send()
        .await
        .expect("dashboard request failed");
    assert!(resp.status().is_redirection());
}
