use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::state::AppState;

pub mod addresses;
pub mod cart;
pub mod categories;
pub mod descriptions;
pub mod doc;
pub mod health;
pub mod image_to_text;
pub mod orders;
pub mod payments;
pub mod products;
pub mod ranks;
pub mod reviews;
pub mod users;

// State is bound once in `create_router`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/user", users::router())
        .nest("/category", categories::router())
        .nest("/product", products::router())
        .nest("/descriptions", descriptions::router())
        .nest("/rank", ranks::router())
}

/// Every route the service exposes, bound to `state`. Server-level layers are
/// added by the binary.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .nest("/image-to-text", image_to_text::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("No route for {}", uri.path()))
}
