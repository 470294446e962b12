//! # QA API Handlers
//!
//! Quality assurance reviews submitted leads, accepting or rejecting them
//! and attaching the call recording reference.

use crate::error::ApiError;
use crate::handlers::types::LeadDto;
use crate::lifecycle::{LeadStatus, LifecycleRole};
use crate::repositories::LeadRepository;
use crate::server::AppState;
use axum::{extract::State, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request payload for a QA review decision
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLeadRequestDto {
    pub lead_id: Uuid,
    /// Requested status; QA may move SUBMITTED to ACCEPTED or REJECTED
    pub status: LeadStatus,
    pub recording: Option<String>,
}

/// Apply a QA review decision to a lead
#[utoipa::path(
    put,
    path = "/api/qa",
    request_body = ReviewLeadRequestDto,
    responses(
        (status = 200, description = "The updated lead", body = LeadDto),
        (status = 404, description = "Lead not found", body = ApiError),
        (status = 409, description = "Transition not permitted for QA", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "qa"
)]
pub async fn review_lead(
    State(state): State<AppState>,
    Json(request): Json<ReviewLeadRequestDto>,
) -> Result<Json<LeadDto>, ApiError> {
    let lead = LeadRepository::new(&state.db)
        .update_status(
            request.lead_id,
            request.status,
            request.recording,
            LifecycleRole::Qa,
        )
        .await?;

    tracing::info!(lead_id = %lead.id, status = %lead.status, "QA review applied");

    Ok(Json(LeadDto::from(lead)))
}

/// List all leads for review, newest first
#[utoipa::path(
    get,
    path = "/api/qa",
    responses(
        (status = 200, description = "All leads ordered newest first", body = [LeadDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "qa"
)]
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<LeadDto>>, ApiError> {
    let leads = LeadRepository::new(&state.db).list_all().await?;

    Ok(Json(leads.into_iter().map(LeadDto::from).collect()))
}
