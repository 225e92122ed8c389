//! DTOs module - Data Transfer Objects
//!
//! DTOs keep the external (API) representation apart from the persisted entities.

pub mod gift_card;
pub mod query;

pub use gift_card::{CreateGiftCardDTO, FieldError, GiftCardDTO, parse_points_cost, parse_value};
pub use query::GiftCardSearchQuery;
