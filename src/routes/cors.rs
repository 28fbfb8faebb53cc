use crate::config::Config;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Build the cross-origin policy from the configured origins
pub fn cors_layer(config: &Config) -> CorsLayer {
    let Some(origins) = config.cors_origin_list() else {
        // Allows every origin with credentials. In production, set CORS_ORIGINS
        // to the specific origins that need access.
        if config.is_production() {
            warn!("CORS allows all origins in production, set CORS_ORIGINS to restrict it");
        }
        return CorsLayer::very_permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    info!("CORS restricted to {} origin(s)", origins.len());

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
