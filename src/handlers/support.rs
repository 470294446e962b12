//! # Support API Handlers
//!
//! Support routes accepted leads to realtors and manages realtor
//! activation.

use crate::error::ApiError;
use crate::handlers::types::{AssignmentDto, LeadDto, RealtorDto};
use crate::repositories::{AssignmentRepository, LeadRepository, RealtorRepository};
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request payload for assigning a lead to a realtor
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignLeadRequestDto {
    pub lead_id: Uuid,
    pub realtor_id: Uuid,
}

/// Request payload for toggling realtor activation
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRealtorActivationDto {
    pub realtor_id: Uuid,
    pub is_active: bool,
}

/// List all accepted leads, newest first
#[utoipa::path(
    get,
    path = "/api/support",
    responses(
        (status = 200, description = "Accepted leads ordered newest first", body = [LeadDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "support"
)]
pub async fn list_accepted_leads(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadDto>>, ApiError> {
    let leads = LeadRepository::new(&state.db).list_accepted().await?;

    Ok(Json(leads.into_iter().map(LeadDto::from).collect()))
}

/// Assign an accepted lead to a realtor
#[utoipa::path(
    post,
    path = "/api/support",
    request_body = AssignLeadRequestDto,
    responses(
        (status = 201, description = "The created assignment", body = AssignmentDto),
        (status = 404, description = "Lead or realtor not found", body = ApiError),
        (status = 409, description = "Lead is not assignable", body = ApiError),
        (status = 500, description = "Assignment aborted, no partial effect", body = ApiError)
    ),
    tag = "support"
)]
pub async fn assign_lead(
    State(state): State<AppState>,
    Json(request): Json<AssignLeadRequestDto>,
) -> Result<(StatusCode, Json<AssignmentDto>), ApiError> {
    let assignment = AssignmentRepository::new(&state.db)
        .assign(request.lead_id, request.realtor_id)
        .await?;

    tracing::info!(
        lead_id = %assignment.lead_id,
        realtor_id = %assignment.realtor_id,
        "Lead assigned"
    );

    Ok((StatusCode::CREATED, Json(AssignmentDto::from(assignment))))
}

/// Toggle whether a realtor may receive assignments
#[utoipa::path(
    put,
    path = "/api/support",
    request_body = UpdateRealtorActivationDto,
    responses(
        (status = 200, description = "The updated realtor", body = RealtorDto),
        (status = 404, description = "Realtor not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "support"
)]
pub async fn update_realtor_activation(
    State(state): State<AppState>,
    Json(request): Json<UpdateRealtorActivationDto>,
) -> Result<Json<RealtorDto>, ApiError> {
    let realtor = RealtorRepository::new(&state.db)
        .set_active(request.realtor_id, request.is_active)
        .await?;

    Ok(Json(RealtorDto::from(realtor)))
}
