//! Example message endpoint served at the site root.

use axum::Json;
use serde::Serialize;

/// Fixed message returned by `GET /`.
pub const EXAMPLE_MESSAGE: &str = "É um JSON de exemplo...";

/// Body of the example endpoint: `{"mensagem":"É um JSON de exemplo..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleMessage {
    pub mensagem: &'static str,
}

/// Example message handler.
pub async fn index() -> Json<ExampleMessage> {
    tracing::debug!("Serving example message");
    Json(ExampleMessage {
        mensagem: EXAMPLE_MESSAGE,
    })
}
