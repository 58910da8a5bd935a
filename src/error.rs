//! Process-level errors.
//!
//! Request handling cannot fail; everything that can go wrong happens while
//! the process starts: reading configuration, installing the log subscriber,
//! and binding or running the listener.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
