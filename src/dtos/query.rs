//! Query DTOs - Query string parameters

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/gift_cards`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GiftCardSearchQuery {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, rename = "companyName")]
    pub company_name: Option<String>,
}
