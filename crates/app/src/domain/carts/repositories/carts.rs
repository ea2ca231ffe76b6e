//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    domain::carts::records::{CartRecord, CartUuid},
    identity::models::UserUuid,
};

const GET_OR_CREATE_CART_SQL: &str = include_str!("../sql/get_or_create_cart.sql");
const GET_CART_FOR_USER_SQL: &str = include_str!("../sql/get_cart_for_user.sql");
const LOCK_CART_FOR_USER_SQL: &str = include_str!("../sql/lock_cart_for_user.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch the user's cart, creating it when absent.
    ///
    /// The conflict arm writes the existing row, so the returned cart is
    /// row-locked either way and concurrent mutations for the same user
    /// serialize behind it.
    pub(crate) async fn get_or_create_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_OR_CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch the user's cart with a `FOR UPDATE` row lock.
    pub(crate) async fn lock_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
