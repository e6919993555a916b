//! Integration tests for the customer auth API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The web server running (cargo run -p laundrypro-web)
//!
//! Run with: cargo test -p laundrypro-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use laundrypro_integration_tests::{base_url, session_client, unique_email};

/// Register a user and return the response.
async fn register(
    client: &reqwest::Client,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({
            "name": name,
            "email": email,
            "phone": phone,
            "password": password,
        }))
        .send()
        .await
        .expect("register request failed")
}

async fn login(client: &reqwest::Client, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("login request failed")
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_register_then_login_round_trip() {
    let client = session_client();
    let email = unique_email("roundtrip");

    let resp = register(&client, "Test Customer", &email, "9876543210", "pw-123456").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["user"]["id"].as_i64().is_some_and(|id| id > 0));
    assert_eq!(body["user"]["name"], "Test Customer");

    // A fresh client (no auto-login cookie) can log in with the same creds
    let fresh = session_client();
    let resp = login(&fresh, &email, "pw-123456").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "Login successful");
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_duplicate_email_differing_only_by_case() {
    let client = session_client();
    let email = unique_email("dupe");

    let resp = register(&client, "First", &email, "9876543210", "pw-123456").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let shouting = email.to_uppercase();
    let resp = register(&client, "Second", &shouting, "9876543211", "pw-654321").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_register_rejects_missing_fields() {
    let client = session_client();

    let resp = register(&client, "", &unique_email("missing"), "9876543210", "pw").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let client = session_client();
    let email = unique_email("creds");

    let resp = register(&client, "Cred Tester", &email, "9876543210", "pw-123456").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Wrong password for an existing email
    let wrong_password = login(&session_client(), &email, "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let body_a: Value = wrong_password.json().await.expect("invalid JSON");

    // Non-existent email
    let unknown_email = login(&session_client(), &unique_email("ghost"), "pw-123456").await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let body_b: Value = unknown_email.json().await.expect("invalid JSON");

    assert_eq!(body_a["message"], "Invalid credentials");
    assert_eq!(body_a, body_b);
}

#[tokio::test]
#[ignore = "Requires running web server and PostgreSQL"]
async fn test_logout_is_idempotent() {
    let client = session_client();

    for _ in 0..2 {
        let resp = client
            .post(format!("{}/api/auth/logout", base_url()))
            .send()
            .await
            .expect("logout request failed");
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = resp.json().await.expect("invalid JSON");
        assert_eq!(body["message"], "Logged out successfully");
    }
}
