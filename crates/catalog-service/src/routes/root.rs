//! Service root endpoint.

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to Catalog Service";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / — returns the service greeting.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
