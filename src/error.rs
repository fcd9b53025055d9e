//! Host startup errors.

use std::net::SocketAddr;

/// Errors that abort host startup or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
