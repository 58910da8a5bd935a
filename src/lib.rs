//! exemplo: a small HTTP service with two fixed JSON endpoints.
//!
//! `GET /` answers with an example message and `GET /health` with a liveness
//! status. The library exposes the router and the server shell so both the
//! binary and the integration tests build the exact same application.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::StartupError;
pub use routes::create_router;
