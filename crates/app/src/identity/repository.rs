//! Identity repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::identity::models::{NewUser, UserRecord, UserUuid};

const FIND_USER_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_user_by_token_hash.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");

/// Token owner row resolved during bearer authentication.
#[derive(Debug, Clone)]
struct TokenOwner {
    user_uuid: UserUuid,
}

#[derive(Debug, Clone)]
pub(crate) struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_user_by_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<UserUuid>, sqlx::Error> {
        query_as::<Postgres, TokenOwner>(FIND_USER_BY_TOKEN_HASH_SQL)
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map(|record| record.map(|record| record.user_uuid))
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &NewUser,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(&user.email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_api_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        token_hash: &str,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_API_TOKEN_SQL)
            .bind(Uuid::now_v7())
            .bind(user.into_uuid())
            .bind(token_hash)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for TokenOwner {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
