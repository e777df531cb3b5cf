use axum::Router;

pub mod inquiries;
pub mod products;
pub mod system;

/// Router for all public endpoints (no authentication on this API).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/inquiries", inquiries::router())
}
