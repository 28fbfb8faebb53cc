use crate::{
    config::Config,
    docs::ApiDoc,
    handlers::{health_check, not_found, read_item, read_root},
    routes::cors::cors_layer,
};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(read_root))
        .route("/items/:item_id", get(read_item))
}

/// Compose the API routes with docs, fallback and middleware
pub fn create_app(config: &Config) -> Router {
    create_api_routes()
        // Mount Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .fallback(not_found)
        // Applies to all routes and the fallback added above
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}
