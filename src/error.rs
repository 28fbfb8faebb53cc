//! Errors that stop the server process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The serving loop exited with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
