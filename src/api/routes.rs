//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{admission_routes, contact_routes, health};
use super::middleware::cors_layer;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::CorsPolicy;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, cors: &CorsPolicy) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Intake resources
        .merge(admission_routes())
        .merge(contact_routes())
        .fallback(not_found);

    let router = match cors_layer(cors) {
        Some(layer) => router.layer(layer),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "School intake API"
}

/// Unknown paths get the standard error envelope
async fn not_found() -> AppError {
    AppError::NotFound
}
