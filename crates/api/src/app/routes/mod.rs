use axum::Router;

pub mod products;
pub mod system;

/// Router for all versioned API endpoints.
pub fn router() -> Router {
    Router::new().nest(products::BASE_PATH, products::router())
}
