//! Tests for realtor sign-up and support's realtor activation toggle.

mod test_utils;

use axum::http::StatusCode;
use leadgen::models::user::{Entity as User, UserRole};
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{realtor_payload, request_json, setup_test_app};

#[tokio::test]
async fn test_signup_returns_created_realtor() {
    let (state, app) = setup_test_app().await.unwrap();

    let (status, realtor) = request_json(
        &app,
        "POST",
        "/api/sales",
        Some(realtor_payload("alice@brownrealty.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(realtor["firstName"], "Alice");
    assert_eq!(realtor["email"], "alice@brownrealty.com");
    assert_eq!(realtor["isActive"], true);

    // The linked user was created with the REALTOR role in the same operation.
    let user_id: uuid::Uuid = realtor["userId"].as_str().unwrap().parse().unwrap();
    let user = User::find_by_id(user_id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.role, UserRole::Realtor);
    assert_eq!(user.email, "alice@brownrealty.com");
    assert_eq!(user.password.len(), 8);
}

#[tokio::test]
async fn test_agent_code_matches_pattern() {
    let (_state, app) = setup_test_app().await.unwrap();

    // Several sign-ups, all must match [A-Z][A-Z][0-9]{4}.
    for n in 0..5 {
        let (status, realtor) = request_json(
            &app,
            "POST",
            "/api/sales",
            Some(realtor_payload(&format!("agent-{}@brownrealty.com", n))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let code = realtor["agentCode"].as_str().unwrap();
        let bytes = code.as_bytes();
        assert_eq!(bytes.len(), 6, "unexpected agent code: {}", code);
        assert!(bytes[0].is_ascii_uppercase());
        assert!(bytes[1].is_ascii_uppercase());
        assert!(bytes[2..].iter().all(|b| b.is_ascii_digit()));
    }
}

#[tokio::test]
async fn test_duplicate_email_is_conflict_with_no_partial_rows() {
    let (state, app) = setup_test_app().await.unwrap();

    let (status, _) = request_json(
        &app,
        "POST",
        "/api/sales",
        Some(realtor_payload("dup@brownrealty.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = request_json(
        &app,
        "POST",
        "/api/sales",
        Some(realtor_payload("dup@brownrealty.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CONFLICT");

    // Exactly one user row carries the email; the failed sign-up left nothing.
    let users = User::find().all(&state.db).await.unwrap();
    let matching: Vec<_> = users
        .iter()
        .filter(|u| u.email == "dup@brownrealty.com")
        .collect();
    assert_eq!(matching.len(), 1);
}

#[tokio::test]
async fn test_support_toggles_realtor_activation() {
    let (_state, app) = setup_test_app().await.unwrap();

    let (_, realtor) = request_json(
        &app,
        "POST",
        "/api/sales",
        Some(realtor_payload("toggle@brownrealty.com")),
    )
    .await;
    let realtor_id = realtor["id"].as_str().unwrap().to_string();

    let (status, updated) = request_json(
        &app,
        "PUT",
        "/api/support",
        Some(json!({ "realtorId": realtor_id, "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isActive"], false);

    let (status, updated) = request_json(
        &app,
        "PUT",
        "/api/support",
        Some(json!({ "realtorId": realtor_id, "isActive": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isActive"], true);

    let (status, error) = request_json(
        &app,
        "PUT",
        "/api/support",
        Some(json!({ "realtorId": uuid::Uuid::new_v4().to_string(), "isActive": false })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}
