//! Process lifecycle: startup/teardown hooks around the serving period and
//! the signal future that ends it.

use crate::utils::ScopeGuard;
use tokio::signal;
use tracing::{error, info};

type Teardown = Box<dyn FnOnce() + Send>;

/// Holds the teardown hook for as long as the service is serving.
///
/// Teardown runs when the value is dropped: after a clean stop, after the
/// server returns an error, or while unwinding from a panic. It never runs
/// if startup did not complete.
pub struct Lifespan {
    _teardown: ScopeGuard<Teardown>,
}

impl Lifespan {
    /// Run the default startup hook and arm the default teardown.
    pub fn start() -> Self {
        Self::with_hooks(
            || info!("Starting up..."),
            || info!("Shutting down..."),
        )
    }

    pub fn with_hooks<S, T>(startup: S, teardown: T) -> Self
    where
        S: FnOnce(),
        T: FnOnce() + Send + 'static,
    {
        startup();
        Self {
            _teardown: ScopeGuard::new(Box::new(teardown) as Teardown),
        }
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
