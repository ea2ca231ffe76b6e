//! Coupons Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Row, Transaction, query_as};

use crate::domain::coupons::data::NewCoupon;
use crate::domain::coupons::records::{CouponRecord, CouponUuid, OrderCouponRecord};
use crate::domain::orders::records::OrderUuid;
use crate::rows::{amount_to_i64, try_get_amount};

const CREATE_COUPON_SQL: &str = include_str!("sql/create_coupon.sql");
const DEACTIVATE_COUPON_SQL: &str = include_str!("sql/deactivate_coupon.sql");
const FIND_COUPON_BY_CODE_SQL: &str = include_str!("sql/find_coupon_by_code.sql");
const GET_APPLIED_COUPON_SQL: &str = include_str!("sql/get_applied_coupon.sql");
const INSERT_APPLIED_COUPON_SQL: &str = include_str!("sql/insert_applied_coupon.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCouponsRepository;

impl PgCouponsRepository {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new_coupon: &NewCoupon,
    ) -> Result<CouponRecord, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(CREATE_COUPON_SQL)
            .bind(new_coupon.uuid.into_uuid())
            .bind(&new_coupon.code)
            .bind(amount_to_i64(new_coupon.discount_amount, "discount_amount")?)
            .bind(SqlxTimestamp::from(new_coupon.expires_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn deactivate_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(DEACTIVATE_COUPON_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<CouponRecord>, sqlx::Error> {
        query_as::<Postgres, CouponRecord>(FIND_COUPON_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn get_applied(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderCouponRecord>, sqlx::Error> {
        query_as::<Postgres, OrderCouponRecord>(GET_APPLIED_COUPON_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_applied(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        coupon: CouponUuid,
        discount_applied: u64,
    ) -> Result<OrderCouponRecord, sqlx::Error> {
        query_as::<Postgres, OrderCouponRecord>(INSERT_APPLIED_COUPON_SQL)
            .bind(order.into_uuid())
            .bind(coupon.into_uuid())
            .bind(amount_to_i64(discount_applied, "discount_applied")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl FromRow<'_, PgRow> for CouponRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            uuid: CouponUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            discount_amount: try_get_amount(row, "discount_amount")?,
            is_active: row.try_get("is_active")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl FromRow<'_, PgRow> for OrderCouponRecord {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            coupon_uuid: CouponUuid::from_uuid(row.try_get("coupon_uuid")?),
            discount_applied: try_get_amount(row, "discount_applied")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
