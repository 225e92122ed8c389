//! Services module - Business logic
//!
//! Services validate client input, talk to the store and turn absence or store
//! failures into typed errors. They know nothing about HTTP.

pub mod gift_card;

pub use gift_card::GiftCardService;

use crate::dtos::FieldError;
use crate::repositories::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The requested or filtered gift cards do not exist
    #[error("{0}")]
    NotFound(String),

    /// The store refused to persist a new gift card
    #[error("failed to create gift card")]
    CreationFailed(#[source] StoreError),

    #[error("invalid gift card id: {0}")]
    InvalidId(String),

    #[error("invalid value filter: {0}")]
    InvalidFilter(String),

    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
