//! Application State - Shared state handed to every handler

use crate::repositories::GiftCardStore;
use crate::services::GiftCardService;
use std::sync::Arc;

/// Application state shared by all routes
///
/// Holds no mutable data of its own; the store behind the service is the only shared
/// resource.
pub struct AppState {
    /// Gift card business logic
    pub gift_cards: GiftCardService,
}

impl AppState {
    /// Wires the service on top of the given store
    pub fn new(store: Arc<dyn GiftCardStore>) -> Self {
        Self {
            gift_cards: GiftCardService::new(store),
        }
    }
}
