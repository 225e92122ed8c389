//! Gift card service - Create, fetch, search and delete gift cards
//!
//! Each operation issues the store calls it needs and nothing else: no caching, no
//! retries, no locking of its own.

use super::ServiceError;
use crate::dtos::{CreateGiftCardDTO, GiftCardDTO, GiftCardSearchQuery, parse_value};
use crate::entities::{GiftCard, GiftCardFilter};
use crate::repositories::GiftCardStore;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct GiftCardService {
    store: Arc<dyn GiftCardStore>,
}

impl GiftCardService {
    pub fn new(store: Arc<dyn GiftCardStore>) -> Self {
        Self { store }
    }

    /// Validates the request, builds a new gift card and persists it
    #[instrument(skip(self, request), fields(company_name = %request.company_name))]
    pub async fn create(&self, request: CreateGiftCardDTO) -> Result<GiftCardDTO, ServiceError> {
        debug!("Creating gift card");
        request.validate()?;
        let gift_card = GiftCard::try_from(request)?;

        let created = self.store.create(&gift_card).await.map_err(|err| {
            error!(error = %err, "Store failed to persist gift card");
            ServiceError::CreationFailed(err)
        })?;

        info!(id = %created.id, "Gift card created");
        Ok(GiftCardDTO::from(created))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<GiftCardDTO, ServiceError> {
        let id = parse_id(id)?;
        match self.store.find_by_id(id).await? {
            Some(gift_card) => {
                debug!("Gift card found");
                Ok(GiftCardDTO::from(gift_card))
            }
            None => {
                warn!("Gift card not found");
                Err(not_found(id))
            }
        }
    }

    /// Searches gift cards, absent filters match every record
    ///
    /// An empty result is reported as [`ServiceError::NotFound`], never as an empty list.
    #[instrument(skip(self, query), fields(value = ?query.value, company_name = ?query.company_name))]
    pub async fn find(&self, query: GiftCardSearchQuery) -> Result<Vec<GiftCardDTO>, ServiceError> {
        let value = query
            .value
            .as_deref()
            .map(parse_value)
            .transpose()
            .map_err(|err| ServiceError::InvalidFilter(err.reason))?;
        let filter = GiftCardFilter {
            value,
            company_name: query.company_name,
        };

        let gift_cards = self.store.find_by_filter(&filter).await?;
        if gift_cards.is_empty() {
            warn!("No gift cards matched");
            return Err(ServiceError::NotFound("No gift cards found".to_string()));
        }

        info!("Found {} gift cards", gift_cards.len());
        Ok(gift_cards.into_iter().map(GiftCardDTO::from).collect())
    }

    /// Deletes a gift card after checking it exists
    ///
    /// The existence check and the delete are two separate store calls. A delete that
    /// removes nothing (a concurrent delete won the race) is reported as not found.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !self.store.exists_by_id(id).await? {
            warn!("Gift card not found");
            return Err(not_found(id));
        }

        if !self.store.delete_by_id(id).await? {
            warn!("Gift card vanished before delete");
            return Err(not_found(id));
        }

        info!("Gift card deleted");
        Ok(())
    }
}

fn parse_id(id: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(id).map_err(|_| ServiceError::InvalidId(id.to_string()))
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Gift card with ID: {id} not found"))
}
