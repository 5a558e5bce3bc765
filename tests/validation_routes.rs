//! Request validation through the full router. None of these requests reach the database.

mod common;

use axum::http::{Method, StatusCode};
use common::{assert_fail, offline_app, send};

#[tokio::test]
async fn health_and_version() {
    let app = offline_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], "bizdesk-api");
}

#[tokio::test]
async fn create_without_required_field() {
    let app = offline_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/inventory/categories",
        Some(r#"{"description":"tools"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_fail(&body, "Missing required field: name.");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn empty_body_counts_as_missing_fields() {
    let app = offline_app();
    let (status, body) = send(&app, Method::POST, "/api/inventory/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_fail(&body, "Missing required field: name.");
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = offline_app();
    for (method, uri) in [
        (Method::GET, "/api/inventory/products/abc"),
        (Method::DELETE, "/api/inventory/products/1x"),
        (Method::GET, "/api/ghostDiagnostics/chosen-traits/form/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_fail(&body, "Invalid id.");
    }
}

#[tokio::test]
async fn patch_without_fields() {
    let app = offline_app();
    let (_, body) = send(&app, Method::PATCH, "/api/inventory/categories/3", Some("{}")).await;
    assert_fail(&body, "No fields provided to update.");

    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/inventory/categories/3",
        Some(r#"{"name":"","unknown":"x"}"#),
    )
    .await;
    assert_fail(&body, "No fields provided to update.");
}

#[tokio::test]
async fn narrow_patch_ignores_fields_outside_its_subset() {
    let app = offline_app();
    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/fleet/rental/rental-status/4",
        Some(r#"{"unknown":"returned"}"#),
    )
    .await;
    assert_fail(&body, "No fields provided to update.");

    let (_, body) = send(&app, Method::PATCH, "/api/fleet/rental/rental-status/x", Some("{}")).await;
    assert_fail(&body, "Invalid id.");
}

#[tokio::test]
async fn rating_outside_range() {
    let app = offline_app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/reviews/products",
        Some(r#"{"productID":1,"accountID":2,"rating":7}"#),
    )
    .await;
    assert_fail(&body, "Invalid rating value, must be 1-5");

    let (_, body) = send(&app, Method::PATCH, "/api/reviews/services/1", Some(r#"{"rating":0}"#)).await;
    assert_fail(&body, "Invalid rating value, must be 1-5");
}

#[tokio::test]
async fn review_missing_fields() {
    let app = offline_app();
    let (_, body) = send(&app, Method::POST, "/api/reviews/rentals", Some(r#"{"rating":3}"#)).await;
    assert_fail(&body, "Missing required fields");
}

#[tokio::test]
async fn payment_requires_card_number() {
    let app = offline_app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/pos/payments",
        Some(r#"{"accountID":1,"amount":12.5}"#),
    )
    .await;
    assert_fail(&body, "Missing required fields.");
}

#[tokio::test]
async fn append_only_resources_reject_update_and_delete() {
    let app = offline_app();
    let (status, _) = send(&app, Method::PATCH, "/api/pos/payments/1", Some(r#"{"amount":1}"#)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _) = send(&app, Method::DELETE, "/api/pos/item-transactions/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn link_delete_requires_both_keys() {
    let app = offline_app();
    let (_, body) = send(
        &app,
        Method::DELETE,
        "/api/ghostDiagnostics/chosen-traits",
        Some(r#"{"inquiryFormID":1}"#),
    )
    .await;
    assert_fail(&body, "Missing required fields.");
}

#[tokio::test]
async fn login_without_credentials() {
    let app = offline_app();
    let (_, body) = send(&app, Method::POST, "/api/pos/login", Some(r#"{"username":"ann"}"#)).await;
    assert_fail(&body, "Missing email or password.");
}

#[tokio::test]
async fn register_validates_like_customer_create() {
    let app = offline_app();
    let (_, body) = send(&app, Method::POST, "/api/pos/register", Some(r#"{"email":"a@b.c"}"#)).await;
    assert_fail(&body, "Missing required fields.");
}

#[tokio::test]
async fn transport_errors_keep_their_status() {
    let app = offline_app();
    let (status, body) = send(&app, Method::POST, "/api/inventory/categories", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Invalid JSON body.");

    let big = format!(r#"{{"name":"{}"}}"#, "x".repeat(4096));
    let (status, _) = send(&app, Method::POST, "/api/inventory/categories", Some(&big)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let (status, _) = send(&app, Method::GET, "/api/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn array_body_is_not_an_object() {
    let app = offline_app();
    let (status, body) = send(&app, Method::POST, "/api/inventory/categories", Some("[1,2]")).await;
    assert_eq!(status, StatusCode::OK);
    assert_fail(&body, "Request body must be a JSON object.");
}
