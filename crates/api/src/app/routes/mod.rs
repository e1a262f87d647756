use axum::Router;

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod system;
pub mod whatsapp;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/whatsapp", whatsapp::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/dashboard", dashboard::router())
}
