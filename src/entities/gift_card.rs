//! GiftCard entity - Persisted gift card record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GiftCard {
    /// Assigned once at creation, never changes afterwards
    pub id: Uuid,
    pub company_name: String,
    /// Monetary amount, kept as an exact decimal
    pub card_value: Decimal,
    pub currency: String,
    pub points_cost: u32,
}

impl GiftCard {
    /// Build a new gift card with a freshly generated id
    pub fn new(
        company_name: impl Into<String>,
        card_value: Decimal,
        currency: impl Into<String>,
        points_cost: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_name: company_name.into(),
            card_value,
            currency: currency.into(),
            points_cost,
        }
    }
}

/// Optional equality constraints used when searching gift cards
///
/// A `None` field matches every record; present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftCardFilter {
    pub value: Option<Decimal>,
    pub company_name: Option<String>,
}

impl GiftCardFilter {
    pub fn matches(&self, gift_card: &GiftCard) -> bool {
        self.value.is_none_or(|value| gift_card.card_value == value)
            && self
                .company_name
                .as_deref()
                .is_none_or(|company| gift_card.company_name == company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fred_300() -> GiftCard {
        GiftCard::new("Company Fred", Decimal::from_str("300.00").unwrap(), "GBP", 1000)
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        assert_ne!(fred_300().id, fred_300().id);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(GiftCardFilter::default().matches(&fred_300()));
    }

    #[test]
    fn test_filter_value_compares_numerically() {
        let filter = GiftCardFilter {
            value: Some(Decimal::from(300)),
            company_name: None,
        };
        assert!(filter.matches(&fred_300()));
    }

    #[test]
    fn test_filter_requires_both_fields() {
        let filter = GiftCardFilter {
            value: Some(Decimal::from(300)),
            company_name: Some("Company Sid".to_string()),
        };
        assert!(!filter.matches(&fred_300()));
    }

    #[test]
    fn test_filter_company_is_exact() {
        let filter = GiftCardFilter {
            value: None,
            company_name: Some("Company".to_string()),
        };
        assert!(!filter.matches(&fred_300()));
    }
}
