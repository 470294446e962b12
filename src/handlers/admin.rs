//! # Admin API Handlers
//!
//! Read access over the closed set of collections the back office may
//! inspect. The collection tag is parsed into [`ModelKind`] at the
//! boundary; anything outside the set is a validation error, not a
//! fallthrough.

use crate::error::ApiError;
use crate::handlers::types::{LeadDto, RealtorDto, UserDto};
use crate::repositories::{LeadRepository, ModelKind, RealtorRepository, UserRepository};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

/// Query parameters for the admin read endpoint
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub model: Option<String>,
}

/// List every row of the addressed collection
#[utoipa::path(
    get,
    path = "/api/admin",
    params(
        ("model" = String, Query, description = "Collection to list: users, leads or realtors")
    ),
    responses(
        (status = 200, description = "All rows of the collection"),
        (status = 400, description = "Missing or invalid model tag", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "admin"
)]
pub async fn list_model_rows(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = parse_model_tag(query.model.as_deref())?;

    let rows = match kind {
        ModelKind::Users => {
            let users = UserRepository::new(&state.db).list_users().await?;
            to_json_rows(users.into_iter().map(UserDto::from).collect::<Vec<_>>())?
        }
        ModelKind::Leads => {
            let leads = LeadRepository::new(&state.db).list_all().await?;
            to_json_rows(leads.into_iter().map(LeadDto::from).collect::<Vec<_>>())?
        }
        ModelKind::Realtors => {
            let realtors = RealtorRepository::new(&state.db).list_realtors().await?;
            to_json_rows(
                realtors
                    .into_iter()
                    .map(RealtorDto::from)
                    .collect::<Vec<_>>(),
            )?
        }
    };

    Ok(Json(rows))
}

/// Parse the `model` query parameter into the closed tag set.
pub(crate) fn parse_model_tag(value: Option<&str>) -> Result<ModelKind, ApiError> {
    value
        .and_then(ModelKind::parse)
        .ok_or_else(|| {
            ApiError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                "Invalid model specified",
            )
        })
}

pub(crate) fn to_json_rows<T: serde::Serialize>(rows: T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(rows).map_err(|err| ApiError::from(anyhow::Error::new(err)))
}
