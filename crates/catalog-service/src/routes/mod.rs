//! Route handlers.

pub mod health;
pub mod metrics;
pub mod root;

use axum::http::Uri;

use crate::error::ApiError;

/// Handles any request that no route matched.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
