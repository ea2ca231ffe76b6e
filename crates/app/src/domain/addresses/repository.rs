//! Shipping Addresses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Row, Transaction, query, query_as};

use crate::domain::addresses::data::NewAddress;
use crate::domain::addresses::records::{AddressRecord, AddressUuid};
use crate::identity::UserUuid;

const CREATE_ADDRESS_SQL: &str = include_str!("sql/create_address.sql");
const LIST_ADDRESSES_FOR_USER_SQL: &str = include_str!("sql/list_addresses_for_user.sql");
const DELETE_ADDRESS_SQL: &str = include_str!("sql/delete_address.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAddressesRepository;

impl PgAddressesRepository {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        new_address: &NewAddress,
    ) -> Result<AddressRecord, sqlx::Error> {
        query_as::<Postgres, AddressRecord>(CREATE_ADDRESS_SQL)
            .bind(new_address.uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(&new_address.address_line1)
            .bind(new_address.address_line2.as_deref())
            .bind(&new_address.city)
            .bind(&new_address.state)
            .bind(&new_address.postal_code)
            .bind(&new_address.country)
            .bind(&new_address.phone_number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<AddressRecord>, sqlx::Error> {
        query_as::<Postgres, AddressRecord>(LIST_ADDRESSES_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        address: AddressUuid,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_ADDRESS_SQL)
            .bind(address.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}

impl FromRow<'_, PgRow> for AddressRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            uuid: AddressUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            address_line1: row.try_get("address_line1")?,
            address_line2: row.try_get("address_line2")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            phone_number: row.try_get("phone_number")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
