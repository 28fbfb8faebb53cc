use axum::Json;
use crate::models::WelcomeResponse;

const WELCOME_MESSAGE: &str = "Welcome to DBCopy API";

/// Root welcome endpoint
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
