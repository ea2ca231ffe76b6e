//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Row, Transaction, query_as};

use crate::domain::catalog::records::VariantUuid;
use crate::domain::orders::records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid};
use crate::domain::orders::status::OrderStatus;
use crate::identity::UserUuid;
use crate::rows::{amount_to_i64, try_get_amount};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const INSERT_ORDER_LINE_SQL: &str = include_str!("../sql/insert_order_line.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LOCK_ORDER_SQL: &str = include_str!("../sql/lock_order.sql");
const FIND_PENDING_ORDER_FOR_USER_SQL: &str =
    include_str!("../sql/find_pending_order_for_user.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("../sql/list_order_lines.sql");
const SET_ORDER_STATUS_SQL: &str = include_str!("../sql/set_order_status.sql");
const SET_ORDER_TOTAL_SQL: &str = include_str!("../sql/set_order_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        user: UserUuid,
        total_amount: u64,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(user.into_uuid())
            .bind(OrderStatus::Pending.as_str())
            .bind(amount_to_i64(total_amount, "total_amount")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: OrderLineUuid,
        order: OrderUuid,
        variant: VariantUuid,
        quantity: u64,
        price: u64,
    ) -> Result<OrderLineRecord, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(INSERT_ORDER_LINE_SQL)
            .bind(line.into_uuid())
            .bind(order.into_uuid())
            .bind(variant.into_uuid())
            .bind(amount_to_i64(quantity, "quantity")?)
            .bind(amount_to_i64(price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Locks the order row for the rest of the transaction.
    pub(crate) async fn lock_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// The pending order is unique per user, enforced by a partial index.
    pub(crate) async fn find_pending_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(FIND_PENDING_ORDER_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderLineRecord>, sqlx::Error> {
        query_as::<Postgres, OrderLineRecord>(LIST_ORDER_LINES_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn set_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(SET_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        total_amount: u64,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(SET_ORDER_TOTAL_SQL)
            .bind(order.into_uuid())
            .bind(amount_to_i64(total_amount, "total_amount")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl FromRow<'_, PgRow> for OrderRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("order_status")?;
        let order_status = status
            .parse::<OrderStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "order_status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            order_status,
            total_amount: try_get_amount(row, "total_amount")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl FromRow<'_, PgRow> for OrderLineRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            variant_uuid: VariantUuid::from_uuid(row.try_get("variant_uuid")?),
            quantity: try_get_amount(row, "quantity")?,
            price: try_get_amount(row, "price")?,
        })
    }
}
