//! Gift card handlers - `/api/gift_cards`

use crate::core::{AppError, AppState};
use crate::dtos::{CreateGiftCardDTO, GiftCardDTO, GiftCardSearchQuery};
use axum::{
    extract::{
        Json, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state, payload))]
pub async fn create_gift_card(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGiftCardDTO>, JsonRejection>,
) -> Result<(StatusCode, Json<GiftCardDTO>), AppError> {
    let Json(body) = payload?;
    debug!("Create gift card request");
    let created = state.gift_cards.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state, params))]
pub async fn find_gift_cards(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GiftCardSearchQuery>, QueryRejection>, // ?value=300&companyName=Acme
) -> Result<Json<Vec<GiftCardDTO>>, AppError> {
    let Query(params) = params?;
    let gift_cards = state.gift_cards.find(params).await?;
    Ok(Json(gift_cards))
}

#[instrument(skip(state))]
pub async fn get_gift_card_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>, // parsed by the service so a bad id gets our error body
) -> Result<Json<GiftCardDTO>, AppError> {
    let gift_card = state.gift_cards.get_by_id(&id).await?;
    Ok(Json(gift_card))
}

#[instrument(skip(state))]
pub async fn delete_gift_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.gift_cards.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
