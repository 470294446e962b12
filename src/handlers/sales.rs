//! # Sales Sign-Up API Handlers
//!
//! Realtor sign-up: creates the realtor profile together with its login
//! user, generating the agent code and a temporary password.

use crate::error::ApiError;
use crate::handlers::types::RealtorDto;
use crate::repositories::{CreateRealtorRequest, RealtorRepository};
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request payload for realtor sign-up
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRealtorRequestDto {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub brokerage: String,
    pub state: String,
    pub central_zip_code: String,
    pub radius: i32,
    pub sign_up_category: String,
    pub total_team_members: i32,
}

/// Sign up a new realtor
#[utoipa::path(
    post,
    path = "/api/sales",
    request_body = CreateRealtorRequestDto,
    responses(
        (status = 201, description = "Realtor created with a linked REALTOR user", body = RealtorDto),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 409, description = "A realtor with this email already exists", body = ApiError),
        (status = 500, description = "Sign-up aborted, no partial effect", body = ApiError)
    ),
    tag = "sales"
)]
pub async fn create_realtor(
    State(state): State<AppState>,
    Json(request): Json<CreateRealtorRequestDto>,
) -> Result<(StatusCode, Json<RealtorDto>), ApiError> {
    let realtor = RealtorRepository::new(&state.db)
        .create_with_user(CreateRealtorRequest {
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            email: request.email,
            brokerage: request.brokerage,
            state: request.state,
            central_zip_code: request.central_zip_code,
            radius: request.radius,
            sign_up_category: request.sign_up_category,
            total_team_members: request.total_team_members,
        })
        .await?;

    tracing::info!(realtor_id = %realtor.id, agent_code = %realtor.agent_code, "Realtor signed up");

    Ok((StatusCode::CREATED, Json(RealtorDto::from(realtor))))
}
