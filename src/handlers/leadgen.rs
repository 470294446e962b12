//! # Lead Intake API Handlers
//!
//! This module contains handlers for the intake form: submitting a new lead
//! and listing a submitter's own leads.

use crate::error::ApiError;
use crate::handlers::types::LeadDto;
use crate::repositories::{CreateLeadRequest, LeadRepository};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request payload for submitting a new lead
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequestDto {
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub property_address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub home_owner: String,
    pub property_value: String,
    pub contract_with_realtor: String,
    pub submitted_by_id: Uuid,
}

/// Query parameters for listing a submitter's leads
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLeadsQuery {
    pub submitted_by_id: Option<String>,
}

/// Submit a new lead
#[utoipa::path(
    post,
    path = "/api/leadgen",
    request_body = CreateLeadRequestDto,
    responses(
        (status = 201, description = "Lead created in the initial lifecycle state", body = LeadDto),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 404, description = "Submitting user does not exist", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "leadgen"
)]
pub async fn create_lead(
    State(state): State<AppState>,
    Json(request): Json<CreateLeadRequestDto>,
) -> Result<(StatusCode, Json<LeadDto>), ApiError> {
    let repo = LeadRepository::new(&state.db);

    let lead = repo
        .create_lead(CreateLeadRequest {
            customer_first_name: request.customer_first_name,
            customer_last_name: request.customer_last_name,
            phone_number: request.phone_number,
            email_address: request.email_address,
            property_address: request.property_address,
            city: request.city,
            state: request.state,
            zipcode: request.zipcode,
            home_owner: request.home_owner,
            property_value: request.property_value,
            contract_with_realtor: request.contract_with_realtor,
            submitted_by_id: request.submitted_by_id,
        })
        .await?;

    tracing::info!(lead_id = %lead.id, submitted_by_id = %lead.submitted_by_id, "Lead submitted");

    Ok((StatusCode::CREATED, Json(LeadDto::from(lead))))
}

/// List the submitting user's leads, newest first
#[utoipa::path(
    get,
    path = "/api/leadgen",
    params(
        ("submittedById" = String, Query, description = "User whose leads to list")
    ),
    responses(
        (status = 200, description = "Leads ordered newest first", body = [LeadDto]),
        (status = 400, description = "submittedById is missing or invalid", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "leadgen"
)]
pub async fn list_submitted_leads(
    State(state): State<AppState>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<Vec<LeadDto>>, ApiError> {
    let Some(submitted_by_id) = query.submitted_by_id.as_deref() else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "submittedById is required",
        ));
    };

    let submitted_by_id = Uuid::parse_str(submitted_by_id).map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "submittedById must be a valid UUID",
        )
    })?;

    let leads = LeadRepository::new(&state.db)
        .list_by_submitter(submitted_by_id)
        .await?;

    Ok(Json(leads.into_iter().map(LeadDto::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;
    use crate::repositories::{CreateUserRequest, UserRepository};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;
    use tower::ServiceExt;

    async fn setup_test_app() -> (AppState, axum::Router) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let state = AppState { db };
        let app = crate::server::create_app(state.clone());
        (state, app)
    }

    async fn create_submitter(state: &AppState) -> Uuid {
        UserRepository::new(&state.db)
            .create_user(CreateUserRequest {
                email: format!("form-{}@leadgen.local", Uuid::new_v4()),
                password: "changeme".to_string(),
                role: UserRole::Sales,
            })
            .await
            .unwrap()
            .id
    }

    fn lead_payload(submitted_by_id: Uuid) -> serde_json::Value {
        json!({
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

    #[tokio::test]
    async fn test_submit_lead_returns_created() {
        let (state, app) = setup_test_app().await;
        let submitter = create_submitter(&state).await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/leadgen")
            .header("Content-Type", "application/json")
            .body(Body::from(lead_payload(submitter).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let lead: LeadDto = serde_json::from_slice(&body).unwrap();

        assert_eq!(lead.status, crate::lifecycle::LeadStatus::Submitted);
        assert_eq!(lead.customer_first_name, "Jane");
        assert_eq!(lead.submitted_by_id, submitter);
        assert!(lead.assigned_to_id.is_none());
    }

    #[tokio::test]
    async fn test_submit_lead_unknown_user() {
        let (_state, app) = setup_test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/leadgen")
            .header("Content-Type", "application/json")
            .body(Body::from(lead_payload(Uuid::new_v4()).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_requires_submitted_by_id() {
        let (_state, app) = setup_test_app().await;

        let request = Request::builder()
            .method("GET")
            .uri("/api/leadgen")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_json["code"], "VALIDATION_FAILED");
        assert_eq!(error_json["message"], "submittedById is required");
    }

    #[tokio::test]
    async fn test_list_returns_own_leads_only() {
        let (state, app) = setup_test_app().await;
        let submitter = create_submitter(&state).await;
        let other = create_submitter(&state).await;

        for who in [submitter, submitter, other] {
            let request = Request::builder()
                .method("POST")
                .uri("/api/leadgen")
                .header("Content-Type", "application/json")
                .body(Body::from(lead_payload(who).to_string()))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let request = Request::builder()
            .method("GET")
            .uri(&format!("/api/leadgen?submittedById={}", submitter))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let leads: Vec<LeadDto> = serde_json::from_slice(&body).unwrap();
        assert_eq!(leads.len(), 2);
        assert!(leads.iter().all(|l| l.submitted_by_id == submitter));
    }
}
