//! # Realtor API Handlers
//!
//! Realtors browse the available pool and record the outcome of leads
//! assigned to them.

use crate::error::ApiError;
use crate::handlers::types::LeadDto;
use crate::lifecycle::{LeadStatus, LifecycleRole};
use crate::repositories::LeadRepository;
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Query parameters for the available-pool listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableLeadsQuery {
    /// Accepted for contract stability; the pool is currently global and
    /// not personalized per realtor.
    pub realtor_id: Option<String>,
}

/// Request payload for recording a lead outcome
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadOutcomeDto {
    pub lead_id: Uuid,
    /// Requested status; a realtor may move ASSIGNED to CLOSED
    pub status: LeadStatus,
    /// Accepted for contract stability; outcome comments are not persisted
    pub comment: Option<String>,
}

/// List the available pool: accepted, unassigned leads, newest first
#[utoipa::path(
    get,
    path = "/api/realtor",
    params(
        ("realtorId" = Option<String>, Query, description = "Requesting realtor (not used for filtering)")
    ),
    responses(
        (status = 200, description = "Available leads ordered newest first", body = [LeadDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "realtor"
)]
pub async fn list_available_leads(
    State(state): State<AppState>,
    Query(_query): Query<AvailableLeadsQuery>,
) -> Result<Json<Vec<LeadDto>>, ApiError> {
    let leads = LeadRepository::new(&state.db).list_available().await?;

    Ok(Json(leads.into_iter().map(LeadDto::from).collect()))
}

/// Record the outcome of an assigned lead
#[utoipa::path(
    put,
    path = "/api/realtor",
    request_body = UpdateLeadOutcomeDto,
    responses(
        (status = 200, description = "The updated lead", body = LeadDto),
        (status = 404, description = "Lead not found", body = ApiError),
        (status = 409, description = "Transition not permitted for a realtor", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "realtor"
)]
pub async fn update_lead_outcome(
    State(state): State<AppState>,
    Json(request): Json<UpdateLeadOutcomeDto>,
) -> Result<Json<LeadDto>, ApiError> {
    if request.comment.is_some() {
        tracing::debug!(lead_id = %request.lead_id, "Outcome comment received but not persisted");
    }

    let lead = LeadRepository::new(&state.db)
        .update_status(request.lead_id, request.status, None, LifecycleRole::Realtor)
        .await?;

    Ok(Json(LeadDto::from(lead)))
}
