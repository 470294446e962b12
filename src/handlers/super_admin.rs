//! # Super-Admin API Handlers
//!
//! The only hard-delete path in the system: removes a single row by
//! primary key from one of the admin-visible collections.

use crate::error::ApiError;
use crate::handlers::admin::{parse_model_tag, to_json_rows};
use crate::handlers::types::{LeadDto, RealtorDto, UserDto};
use crate::repositories::{LeadRepository, ModelKind, RealtorRepository, UserRepository};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for the super-admin delete endpoint
#[derive(Debug, Deserialize)]
pub struct SuperAdminQuery {
    pub model: Option<String>,
    pub id: Option<String>,
}

/// Delete a single row by primary key, echoing the deleted row
#[utoipa::path(
    delete,
    path = "/api/super-admin",
    params(
        ("model" = String, Query, description = "Collection to delete from: users, leads or realtors"),
        ("id" = String, Query, description = "Primary key of the row to delete")
    ),
    responses(
        (status = 200, description = "The deleted row"),
        (status = 400, description = "Missing or invalid parameters", body = ApiError),
        (status = 404, description = "No row with that id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "super-admin"
)]
pub async fn delete_model_row(
    State(state): State<AppState>,
    Query(query): Query<SuperAdminQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(model), Some(id)) = (query.model.as_deref(), query.id.as_deref()) else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "Model and ID are required",
        ));
    };

    let kind = parse_model_tag(Some(model))?;

    let id = Uuid::parse_str(id).map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "ID must be a valid UUID",
        )
    })?;

    let row = match kind {
        ModelKind::Users => {
            let user = UserRepository::new(&state.db).delete_user(id).await?;
            to_json_rows(UserDto::from(user))?
        }
        ModelKind::Leads => {
            let lead = LeadRepository::new(&state.db).delete_lead(id).await?;
            to_json_rows(LeadDto::from(lead))?
        }
        ModelKind::Realtors => {
            let realtor = RealtorRepository::new(&state.db).delete_realtor(id).await?;
            to_json_rows(RealtorDto::from(realtor))?
        }
    };

    Ok(Json(row))
}
