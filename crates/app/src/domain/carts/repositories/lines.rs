//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        carts::records::{CartLineRecord, CartLineUuid, CartUuid},
        catalog::records::VariantUuid,
    },
    rows::{amount_to_i64, try_get_amount},
};

const UPSERT_CART_LINE_SQL: &str = include_str!("../sql/upsert_cart_line.sql");
const SET_CART_LINE_QUANTITY_SQL: &str = include_str!("../sql/set_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");
const LIST_CART_LINES_SQL: &str = include_str!("../sql/list_cart_lines.sql");
const CLEAR_CART_LINES_SQL: &str = include_str!("../sql/clear_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a line, or merge quantities into the existing line for the
    /// same (cart, variant) pair. A merge keeps the stored `price_at_time`.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineUuid,
        cart: CartUuid,
        variant: VariantUuid,
        quantity: u64,
        price_at_time: u64,
    ) -> Result<CartLineRecord, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(UPSERT_CART_LINE_SQL)
            .bind(line.into_uuid())
            .bind(cart.into_uuid())
            .bind(variant.into_uuid())
            .bind(amount_to_i64(quantity, "quantity")?)
            .bind(amount_to_i64(price_at_time, "price_at_time")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        line: CartLineUuid,
        quantity: u64,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(SET_CART_LINE_QUANTITY_SQL)
            .bind(cart.into_uuid())
            .bind(line.into_uuid())
            .bind(amount_to_i64(quantity, "quantity")?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        line: CartLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(cart.into_uuid())
            .bind(line.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(LIST_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn clear(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: CartUuid::from_uuid(row.try_get("cart_uuid")?),
            variant_uuid: VariantUuid::from_uuid(row.try_get::<Uuid, _>("variant_uuid")?),
            quantity: try_get_amount(row, "quantity")?,
            price_at_time: try_get_amount(row, "price_at_time")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
