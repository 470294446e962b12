//! Test utilities for API testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, building the application router, and driving it
//! with one-shot requests.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use leadgen::models::user::UserRole;
use leadgen::repositories::{CreateUserRequest, UserRepository};
use leadgen::server::{AppState, create_app};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tower::ServiceExt;
use uuid::Uuid;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up the application router backed by a fresh in-memory database.
pub async fn setup_test_app() -> Result<(AppState, Router)> {
    let db = setup_test_db().await?;
    let state = AppState { db };
    let app = create_app(state.clone());

    Ok((state, app))
}

/// Creates a test user with the given role, returning its id.
#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, role: UserRole) -> Result<Uuid> {
    let user = UserRepository::new(db)
        .create_user(CreateUserRequest {
            email: format!("user-{}@leadgen.local", Uuid::new_v4()),
            password: "changeme".to_string(),
            role,
        })
        .await?;

    Ok(user.id)
}

/// Drives the router with one request, returning status and parsed JSON body.
#[allow(dead_code)]
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // Some rejections (e.g. axum's Json extractor) produce plain-text bodies.
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// A complete intake payload for the given submitter.
#[allow(dead_code)]
pub fn lead_payload(submitted_by_id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "customerFirstName": "Jane",
        "customerLastName": "Doe",
        "phoneNumber": "5551234567",
        "emailAddress": "jane@x.com",
        "propertyAddress": "1 Elm St",
        "city": "Troy",
        "state": "NY",
        "zipcode": "12180",
        "homeOwner": "Yes",
        "propertyValue": "300000",
        "contractWithRealtor": "No",
        "submittedById": submitted_by_id.to_string(),
    })
}

/// A complete realtor sign-up payload with the given email.
#[allow(dead_code)]
pub fn realtor_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Alice",
        "lastName": "Brown",
        "phoneNumber": "5559876543",
        "email": email,
        "brokerage": "Brown Realty",
        "state": "NY",
        "centralZipCode": "12180",
        "radius": 25,
        "signUpCategory": "individual",
        "totalTeamMembers": 1,
    })
}
