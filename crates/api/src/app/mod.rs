//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring (catalog, sales ledger, turn log, engine)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(seed_demo: bool) -> Router {
    let services = Arc::new(services::build_services(seed_demo));

    let api = routes::router().layer(Extension(services));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(ServiceBuilder::new())
}
