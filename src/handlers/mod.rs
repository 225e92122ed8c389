//! Handlers module - HTTP layer
//!
//! Handlers decode requests, call the service and render the outcome. Every service
//! error is translated to an HTTP status by [`crate::core::AppError`].

pub mod gift_card;

pub use gift_card::{create_gift_card, delete_gift_card, find_gift_cards, get_gift_card_by_id};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
