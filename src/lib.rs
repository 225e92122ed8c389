//! Gift card service library - exposes the modules and the router for the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, Config, StoreBackend};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    use handlers::*;

    Router::new()
        .route("/", get(root))
        .merge(configure_gift_card_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes for gift card management
fn configure_gift_card_routes() -> Router<Arc<AppState>> {
    use handlers::*;

    Router::new()
        .route(
            "/api/gift_cards",
            get(find_gift_cards).post(create_gift_card),
        )
        // Same collection, reachable with a trailing slash
        .route(
            "/api/gift_cards/",
            get(find_gift_cards).post(create_gift_card),
        )
        .route(
            "/api/gift_cards/{id}",
            get(get_gift_card_by_id).delete(delete_gift_card),
        )
}
