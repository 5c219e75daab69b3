//! HTTP front door for the catalog service.
//!
//! Serves the welcome and health endpoints with structured logging
//! (tracing), per-request correlation ids and Prometheus metrics.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

use axum::Router;
use axum::handler::Handler;
use axum::middleware::from_fn;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes and layers.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .route_layer(from_fn(middleware::track_metrics))
        .fallback(routes::fallback.layer(from_fn(middleware::track_metrics)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id))
}
