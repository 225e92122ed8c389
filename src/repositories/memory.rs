//! MemoryGiftCardStore - In-process store, used for tests and `STORE_BACKEND=memory`

use super::{GiftCardStore, StoreError};
use crate::entities::{GiftCard, GiftCardFilter};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Gift cards kept in insertion order behind a mutex
#[derive(Clone, Debug, Default)]
pub struct MemoryGiftCardStore {
    gift_cards: Arc<Mutex<Vec<GiftCard>>>,
}

impl MemoryGiftCardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GiftCardStore for MemoryGiftCardStore {
    #[instrument(skip(self, gift_card), fields(id = %gift_card.id))]
    async fn create(&self, gift_card: &GiftCard) -> Result<GiftCard, StoreError> {
        let mut gift_cards = self.gift_cards.lock()?;
        if gift_cards.iter().any(|stored| stored.id == gift_card.id) {
            return Err(StoreError::DuplicateId(gift_card.id));
        }
        gift_cards.push(gift_card.clone());
        debug!("Gift card stored in memory");
        Ok(gift_card.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GiftCard>, StoreError> {
        let gift_card = self
            .gift_cards
            .lock()?
            .iter()
            .find(|stored| stored.id == id)
            .cloned();

        Ok(gift_card)
    }

    async fn find_by_filter(&self, filter: &GiftCardFilter) -> Result<Vec<GiftCard>, StoreError> {
        let gift_cards = self
            .gift_cards
            .lock()?
            .iter()
            .filter(|stored| filter.matches(stored))
            .cloned()
            .collect();

        Ok(gift_cards)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.gift_cards.lock()?.iter().any(|stored| stored.id == id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut gift_cards = self.gift_cards.lock()?;
        let before = gift_cards.len();
        gift_cards.retain(|stored| stored.id != id);
        Ok(gift_cards.len() != before)
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not `Send`. Only the string
/// representation is kept.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for StoreError {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn gift_card(company: &str, value: i64) -> GiftCard {
        GiftCard::new(company, Decimal::from(value), "GBP", 1000)
    }

    #[tokio::test]
    async fn test_create_retrieve() {
        let store = MemoryGiftCardStore::new();
        let card = gift_card("Company Fred", 300);

        let created = store.create(&card).await.unwrap();
        assert_eq!(created, card);

        let found = store.find_by_id(card.id).await.unwrap();
        assert_eq!(found, Some(card));
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let store = MemoryGiftCardStore::new();
        let card = gift_card("Company Fred", 300);
        store.create(&card).await.unwrap();

        let res = store.create(&card).await;
        assert!(matches!(res, Err(StoreError::DuplicateId(id)) if id == card.id));
    }

    #[tokio::test]
    async fn test_find_by_filter_keeps_insertion_order() {
        let store = MemoryGiftCardStore::new();
        let first = gift_card("Company Fred", 300);
        let second = gift_card("Company Sid", 300);
        let third = gift_card("Company Fred", 50);
        for card in [&first, &second, &third] {
            store.create(card).await.unwrap();
        }

        let all = store.find_by_filter(&GiftCardFilter::default()).await.unwrap();
        assert_eq!(all, vec![first.clone(), second.clone(), third.clone()]);

        let fred = GiftCardFilter {
            value: None,
            company_name: Some("Company Fred".to_string()),
        };
        let found = store.find_by_filter(&fred).await.unwrap();
        assert_eq!(found, vec![first, third]);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = MemoryGiftCardStore::new();
        let card = gift_card("Company Fred", 300);
        store.create(&card).await.unwrap();

        assert!(store.exists_by_id(card.id).await.unwrap());
        assert!(store.delete_by_id(card.id).await.unwrap());
        assert!(!store.exists_by_id(card.id).await.unwrap());
        // Second delete finds nothing to remove
        assert!(!store.delete_by_id(card.id).await.unwrap());
    }
}
