mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod error;
mod lifecycle;
mod utils;

use config::Config;
use error::ServerError;
use lifecycle::{shutdown_signal, Lifespan};
use routes::create_app;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ServerError> {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Load configuration before logging so LOG_LEVEL can shape the filter
    let loaded = Config::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("dbcopy_api={log_level},tower_http=debug,axum::rejection=trace,{log_level}").into()
        }))
        .init();

    let config = match loaded {
        Ok(config) => {
            info!("✅ Configuration loaded successfully ({})", config.environment);
            config
        }
        Err(e) => {
            error!("❌ Failed to load configuration: {}", e);
            warn!("Using default configuration");
            Config::default()
        }
    };

    let app = create_app(&config);

    // Teardown runs when this drops, however serving ends
    let _lifespan = Lifespan::start();

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
