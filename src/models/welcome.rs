use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the root endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to DBCopy API")]
    pub message: String,
}
