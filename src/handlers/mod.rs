//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Lead Routing API.

use crate::models::ServiceInfo;
use axum::response::Json;

pub mod admin;
pub mod leadgen;
pub mod qa;
pub mod realtor;
pub mod sales;
pub mod super_admin;
pub mod support;
pub mod types;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
