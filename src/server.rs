//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Lead
//! Routing API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/admin", get(handlers::admin::list_model_rows))
        .route(
            "/api/super-admin",
            delete(handlers::super_admin::delete_model_row),
        )
        .route(
            "/api/leadgen",
            post(handlers::leadgen::create_lead).get(handlers::leadgen::list_submitted_leads),
        )
        .route(
            "/api/qa",
            put(handlers::qa::review_lead).get(handlers::qa::list_leads),
        )
        .route(
            "/api/realtor",
            get(handlers::realtor::list_available_leads)
                .put(handlers::realtor::update_lead_outcome),
        )
        .route("/api/sales", post(handlers::sales::create_realtor))
        .route(
            "/api/support",
            get(handlers::support::list_accepted_leads)
                .post(handlers::support::assign_lead)
                .put(handlers::support::update_realtor_activation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    // Resolve the configured bind address
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on: {}", addr);
    tracing::info!("Running in profile: {}", config.profile);

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::admin::list_model_rows,
        crate::handlers::super_admin::delete_model_row,
        crate::handlers::leadgen::create_lead,
        crate::handlers::leadgen::list_submitted_leads,
        crate::handlers::qa::review_lead,
        crate::handlers::qa::list_leads,
        crate::handlers::realtor::list_available_leads,
        crate::handlers::realtor::update_lead_outcome,
        crate::handlers::sales::create_realtor,
        crate::handlers::support::list_accepted_leads,
        crate::handlers::support::assign_lead,
        crate::handlers::support::update_realtor_activation,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::lifecycle::LeadStatus,
            crate::lifecycle::LifecycleRole,
            crate::models::user::UserRole,
            crate::handlers::types::UserDto,
            crate::handlers::types::LeadDto,
            crate::handlers::types::RealtorDto,
            crate::handlers::types::AssignmentDto,
            crate::handlers::leadgen::CreateLeadRequestDto,
            crate::handlers::qa::ReviewLeadRequestDto,
            crate::handlers::realtor::UpdateLeadOutcomeDto,
            crate::handlers::sales::CreateRealtorRequestDto,
            crate::handlers::support::AssignLeadRequestDto,
            crate::handlers::support::UpdateRealtorActivationDto,
        )
    ),
    info(
        title = "Lead Routing API",
        description = "API for lead intake, qualification and routing",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_returns_service_info() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let app = create_app(AppState { db });

        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let info: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(info["service"], "leadgen-api");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let app = create_app(AppState { db });

        let request = Request::builder()
            .method("GET")
            .uri("/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
