//! Repositories module - Persistence for gift cards
//!
//! The service only talks to the [`GiftCardStore`] trait. Two stores implement it:
//! [`GiftCardRepository`] on top of a MySQL pool and [`MemoryGiftCardStore`] kept in
//! process memory.
//!
//! Queries are written with the runtime-checked `sqlx::query*` functions so the crate
//! builds without a live database. Pick the fetch method by the expected row count:
//! `execute` for INSERT/DELETE, `fetch_optional` for zero or one row, `fetch_one`
//! for aggregates and `fetch_all` for lists.

pub mod gift_card;
pub mod memory;
pub mod traits;

pub use gift_card::GiftCardRepository;
pub use memory::MemoryGiftCardStore;
pub use traits::{GiftCardStore, StoreError};

#[cfg(test)]
pub use traits::MockGiftCardStore;
