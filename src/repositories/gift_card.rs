//! GiftCardRepository - MySQL store for gift cards

use super::{GiftCardStore, StoreError};
use crate::entities::{GiftCard, GiftCardFilter};
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const SELECT_GIFT_CARD: &str =
    "SELECT id, company_name, card_value, currency, points_cost FROM gift_card";

/// Raw row of the `gift_card` table, the id is stored as `CHAR(36)`
#[derive(Debug, sqlx::FromRow)]
struct GiftCardRow {
    id: String,
    company_name: String,
    card_value: Decimal,
    currency: String,
    points_cost: u32,
}

impl TryFrom<GiftCardRow> for GiftCard {
    type Error = StoreError;

    fn try_from(row: GiftCardRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|err| StoreError::Adapter(Box::new(err)))?;
        Ok(GiftCard {
            id,
            company_name: row.company_name,
            card_value: row.card_value,
            currency: row.currency,
            points_cost: row.points_cost,
        })
    }
}

pub struct GiftCardRepository {
    connection_pool: MySqlPool,
}

impl GiftCardRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait::async_trait]
impl GiftCardStore for GiftCardRepository {
    #[instrument(skip(self, gift_card), fields(id = %gift_card.id))]
    async fn create(&self, gift_card: &GiftCard) -> Result<GiftCard, StoreError> {
        debug!("Inserting gift card");
        sqlx::query(
            r#"
            INSERT INTO gift_card (id, company_name, card_value, currency, points_cost)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(gift_card.id.to_string())
        .bind(&gift_card.company_name)
        .bind(gift_card.card_value)
        .bind(&gift_card.currency)
        .bind(gift_card.points_cost)
        .execute(&self.connection_pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::DuplicateId(gift_card.id)
            }
            other => other.into(),
        })?;

        // Values are validated to fit DECIMAL(19, 4), the row holds exactly what was bound
        info!("Gift card inserted");
        Ok(gift_card.clone())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GiftCard>, StoreError> {
        let row = sqlx::query_as::<_, GiftCardRow>(&format!("{SELECT_GIFT_CARD} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.connection_pool)
            .await?;

        row.map(GiftCard::try_from).transpose()
    }

    #[instrument(skip(self), fields(value = ?filter.value, company_name = ?filter.company_name))]
    async fn find_by_filter(&self, filter: &GiftCardFilter) -> Result<Vec<GiftCard>, StoreError> {
        let mut query = select_by_filter(filter);
        let rows = query
            .build_query_as::<GiftCardRow>()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} gift cards", rows.len());
        rows.into_iter().map(GiftCard::try_from).collect()
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gift_card WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM gift_card WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Builds the search query, only present filters end up in the WHERE clause
fn select_by_filter(filter: &GiftCardFilter) -> QueryBuilder<'static, MySql> {
    let mut query = QueryBuilder::new(SELECT_GIFT_CARD);
    let mut separator = " WHERE ";

    if let Some(value) = filter.value {
        query.push(separator).push("card_value = ").push_bind(value);
        separator = " AND ";
    }
    if let Some(company_name) = &filter.company_name {
        query
            .push(separator)
            .push("company_name = ")
            .push_bind(company_name.clone());
    }

    query.push(" ORDER BY company_name, id");
    query
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Adapter(Box::new(err))
    }
}
