use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
#[allow(dead_code)]
pub async fn read_root_doc() {}

/// Echo an item id and optional query value
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Integer item id"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Item echoed", body = ItemEcho),
        (status = 422, description = "item_id is not an integer", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn read_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DBCopy API",
        description = "API for DBCopy application",
        version = "0.1.0"
    ),
    paths(
        health_check_doc,
        read_root_doc,
        read_item_doc,
    ),
    components(
        schemas(HealthResponse, WelcomeResponse, ItemEcho, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
