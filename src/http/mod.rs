//! HTTP server module with optional TLS.
//!
//! Two listener modes:
//! - **None (default)**: Plain HTTP, for development or behind a reverse proxy
//! - **Manual**: User-provided PEM certificate and key files
//!
//! The server includes:
//! - HTTP to HTTPS redirect (manual TLS, when enabled)
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod redirect;
mod server;
mod shutdown;

pub use redirect::https_url;
pub use server::{serve_with_handle, start_server, ServerError};
