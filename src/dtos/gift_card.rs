//! GiftCard DTOs - Transfer representations for gift cards
//!
//! Numeric fields travel as decimal strings so no precision is lost on the way
//! through JSON.

use crate::entities::GiftCard;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Gift card as returned to the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GiftCardDTO {
    pub id: Option<String>,
    pub company_name: String,
    pub value: String,
    pub currency: String,
    pub points_cost: String,
}

impl From<GiftCard> for GiftCardDTO {
    fn from(value: GiftCard) -> Self {
        Self {
            id: Some(value.id.to_string()),
            company_name: value.company_name,
            value: value.card_value.to_string(),
            currency: value.currency,
            points_cost: value.points_cost.to_string(),
        }
    }
}

/// DTO to create a new gift card (id is generated server side)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateGiftCardDTO {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    pub value: String,
    #[validate(length(min = 1, max = 3, message = "currency must be 1 to 3 characters"))]
    pub currency: String,
    pub points_cost: String,
}

/// A transfer field that could not be parsed into its domain type
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid {field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl ToString) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

/// Most fractional digits a stored value keeps (`DECIMAL(19, 4)`)
pub const MAX_VALUE_SCALE: u32 = 4;

/// Most integer digits a stored value keeps (`DECIMAL(19, 4)`)
pub const MAX_VALUE_INTEGER_DIGITS: usize = 15;

/// Parse a decimal amount as sent by clients, e.g. `"300.00"`
///
/// Only amounts every store can hold exactly are accepted.
pub fn parse_value(raw: &str) -> Result<Decimal, FieldError> {
    let value = Decimal::from_str(raw.trim()).map_err(|err| FieldError::new("value", err))?;

    if value.scale() > MAX_VALUE_SCALE {
        return Err(FieldError::new(
            "value",
            format!("at most {MAX_VALUE_SCALE} fractional digits are allowed"),
        ));
    }
    let integer_digits = value.trunc().abs().to_string().len();
    if integer_digits > MAX_VALUE_INTEGER_DIGITS {
        return Err(FieldError::new(
            "value",
            format!("at most {MAX_VALUE_INTEGER_DIGITS} integer digits are allowed"),
        ));
    }

    Ok(value)
}

/// Parse a non-negative integer points cost, e.g. `"1000"`
pub fn parse_points_cost(raw: &str) -> Result<u32, FieldError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|err| FieldError::new("points_cost", err))
}

impl TryFrom<CreateGiftCardDTO> for GiftCard {
    type Error = FieldError;

    fn try_from(value: CreateGiftCardDTO) -> Result<Self, Self::Error> {
        let card_value = parse_value(&value.value)?;
        let points_cost = parse_points_cost(&value.points_cost)?;
        Ok(GiftCard::new(
            value.company_name,
            card_value,
            value.currency,
            points_cost,
        ))
    }
}
