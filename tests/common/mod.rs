use axum_test::TestServer;
use gift_card_service::core::AppState;
use gift_card_service::dtos::GiftCardDTO;
use gift_card_service::repositories::MemoryGiftCardStore;
use serde_json::{Value, json};
use std::sync::Arc;

/// Creates an AppState backed by an empty in-memory store
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(MemoryGiftCardStore::new())))
}

/// Creates a TestServer ready to take requests
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = gift_card_service::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

pub fn gift_card_body(company_name: &str, value: &str) -> Value {
    json!({
        "company_name": company_name,
        "value": value,
        "currency": "GBP",
        "points_cost": "1000"
    })
}

/// Creates a gift card through the API and returns the response body
pub async fn create_gift_card(server: &TestServer, company_name: &str, value: &str) -> GiftCardDTO {
    let response = server
        .post("/api/gift_cards")
        .json(&gift_card_body(company_name, value))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<GiftCardDTO>()
}
