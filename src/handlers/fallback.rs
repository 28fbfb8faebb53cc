use axum::{extract::OriginalUri, http::StatusCode, Json};
use crate::models::ErrorResponse;
use tracing::debug;

/// Catch-all for unmatched routes
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    debug!("No route for {}", uri);
    ErrorResponse::with_status(StatusCode::NOT_FOUND, "Not Found")
}
