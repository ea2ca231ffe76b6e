//! Catalog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::catalog::{
        data::NewVariant,
        records::{VariantRecord, VariantUuid},
    },
    rows::{amount_to_i64, try_get_amount},
};

const GET_VARIANT_SQL: &str = include_str!("sql/get_variant.sql");
const CREATE_VARIANT_SQL: &str = include_str!("sql/create_variant.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCatalogRepository;

impl PgCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: VariantUuid,
    ) -> Result<Option<VariantRecord>, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(GET_VARIANT_SQL)
            .bind(variant.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_variant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        variant: &NewVariant,
    ) -> Result<VariantRecord, sqlx::Error> {
        query_as::<Postgres, VariantRecord>(CREATE_VARIANT_SQL)
            .bind(variant.uuid.into_uuid())
            .bind(&variant.name)
            .bind(amount_to_i64(variant.price, "price")?)
            .bind(amount_to_i64(variant.stock_count, "stock_count")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VariantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VariantUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            stock_count: try_get_amount(row, "stock_count")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
