//! Entities module - Domain entities
//!
//! Each entity maps to a table in the database.

pub mod gift_card;

pub use gift_card::{GiftCard, GiftCardFilter};
