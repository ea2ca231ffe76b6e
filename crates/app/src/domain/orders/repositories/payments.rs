//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Row, Transaction, query_as};

use crate::domain::orders::records::{OrderUuid, PaymentRecord, PaymentUuid};
use crate::domain::orders::status::{PaymentMethod, PaymentStatus};
use crate::identity::UserUuid;
use crate::rows::{amount_to_i64, try_get_amount};

const CREATE_PAYMENT_SQL: &str = include_str!("../sql/create_payment.sql");
const GET_PAYMENT_BY_ORDER_SQL: &str = include_str!("../sql/get_payment_by_order.sql");
const LOCK_PAYMENT_FOR_USER_SQL: &str = include_str!("../sql/lock_payment_for_user.sql");
const SET_PAYMENT_STATUS_SQL: &str = include_str!("../sql/set_payment_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: PaymentUuid,
        order: OrderUuid,
        method: PaymentMethod,
        status: PaymentStatus,
        amount: u64,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(payment.into_uuid())
            .bind(order.into_uuid())
            .bind(method.as_str())
            .bind(status.as_str())
            .bind(amount_to_i64(amount, "amount")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_by_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(GET_PAYMENT_BY_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Locks the payment row, scoped to the owning user via the order join.
    pub(crate) async fn lock_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: PaymentUuid,
        user: UserUuid,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(LOCK_PAYMENT_FOR_USER_SQL)
            .bind(payment.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: PaymentUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(SET_PAYMENT_STATUS_SQL)
            .bind(payment.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

impl FromRow<'_, PgRow> for PaymentRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let method: String = row.try_get("payment_method")?;
        let payment_method =
            method
                .parse::<PaymentMethod>()
                .map_err(|error| sqlx::Error::ColumnDecode {
                    index: "payment_method".to_string(),
                    source: Box::new(error),
                })?;

        let status: String = row.try_get("payment_status")?;
        let payment_status =
            status
                .parse::<PaymentStatus>()
                .map_err(|error| sqlx::Error::ColumnDecode {
                    index: "payment_status".to_string(),
                    source: Box::new(error),
                })?;

        Ok(Self {
            uuid: PaymentUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            payment_method,
            payment_status,
            amount: try_get_amount(row, "amount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
