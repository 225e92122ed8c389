//! Store traits
//!
//! This module defines the persistence interface the gift card service relies on.
//! Every method is a single call against the backend and is expected to be atomic
//! on its own; nothing here spans more than one call.

use crate::entities::{GiftCard, GiftCardFilter};
use uuid::Uuid;

/// Persistence operations over gift card records
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GiftCardStore: Send + Sync {
    /// Persists a new gift card
    ///
    /// # Returns
    /// * `Ok(GiftCard)` - The stored record
    /// * `Err(StoreError::DuplicateId)` - A record with the same id already exists
    async fn create(&self, gift_card: &GiftCard) -> Result<GiftCard, StoreError>;

    /// Reads a gift card by its id
    ///
    /// # Returns
    /// * `Ok(Some(GiftCard))` - Record found
    /// * `Ok(None)` - No record with that id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GiftCard>, StoreError>;

    /// Lists the gift cards matching every present field of `filter`
    ///
    /// The result can be empty.
    async fn find_by_filter(&self, filter: &GiftCardFilter) -> Result<Vec<GiftCard>, StoreError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Deletes a gift card by its id
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - Nothing matched the id
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Uniqueness of the primary key was violated
    #[error("gift card {0} already exists")]
    DuplicateId(Uuid),

    /// Concrete adapter errors
    ///
    /// Connectivity, configuration or any other backend failure that is not part of
    /// the domain model.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
