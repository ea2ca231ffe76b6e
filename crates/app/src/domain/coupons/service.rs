//! Coupons Service

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::database::Db;
use crate::domain::coupons::data::NewCoupon;
use crate::domain::coupons::errors::CouponsServiceError;
use crate::domain::coupons::records::{AppliedCoupon, CouponRecord};
use crate::domain::coupons::repository::PgCouponsRepository;
use crate::domain::orders::records::OrderUuid;
use crate::domain::orders::repositories::PgOrdersRepository;
use crate::domain::orders::status::OrderStatus;
use crate::identity::UserUuid;

#[derive(Debug, Clone)]
pub struct PgCouponsService {
    db: Db,
    coupons_repository: PgCouponsRepository,
    orders_repository: PgOrdersRepository,
}

impl PgCouponsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            coupons_repository: PgCouponsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
        }
    }

    #[tracing::instrument(
        name = "coupons.service.create_coupon",
        skip(self, new_coupon),
        fields(coupon_uuid = %new_coupon.uuid, code = %new_coupon.code),
        err
    )]
    pub async fn create_coupon(
        &self,
        new_coupon: NewCoupon,
    ) -> Result<CouponRecord, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupon = self.coupons_repository.create(&mut tx, &new_coupon).await?;

        tx.commit().await?;

        info!(coupon_uuid = %coupon.uuid, "created coupon");

        Ok(coupon)
    }

    #[tracing::instrument(
        name = "coupons.service.deactivate_coupon",
        skip(self),
        fields(code = %code),
        err
    )]
    pub async fn deactivate_coupon(&self, code: &str) -> Result<CouponRecord, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        let coupon = self
            .coupons_repository
            .deactivate_by_code(&mut tx, code)
            .await?
            .ok_or(CouponsServiceError::NotFound)?;

        tx.commit().await?;

        info!(coupon_uuid = %coupon.uuid, "deactivated coupon");

        Ok(coupon)
    }
}

#[async_trait]
impl CouponsService for PgCouponsService {
    #[tracing::instrument(
        name = "coupons.service.apply_to_order",
        skip(self),
        fields(user_uuid = %user, order_uuid = %order, code = %code),
        err
    )]
    async fn apply_to_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
        code: &str,
    ) -> Result<AppliedCoupon, CouponsServiceError> {
        let mut tx = self.db.begin().await?;

        // Locks the order row so the redemption and the total adjustment
        // cannot interleave with a concurrent apply or checkout.
        let order_record = self
            .orders_repository
            .lock_order(&mut tx, order)
            .await?
            .filter(|record| record.user_uuid == user)
            .ok_or(CouponsServiceError::OrderNotFound)?;

        if order_record.order_status != OrderStatus::Pending {
            return Err(CouponsServiceError::OrderNotPending);
        }

        if self
            .coupons_repository
            .get_applied(&mut tx, order)
            .await?
            .is_some()
        {
            return Err(CouponsServiceError::AlreadyApplied);
        }

        let coupon = self
            .coupons_repository
            .find_by_code(&mut tx, code)
            .await?
            .ok_or(CouponsServiceError::NotFound)?;

        if !coupon.is_active || Timestamp::now() > coupon.expires_at {
            return Err(CouponsServiceError::Expired);
        }

        // Flat discounts clamp at zero; the ledger keeps the portion
        // actually taken, not the coupon's face value.
        let new_total = order_record.total_amount.saturating_sub(coupon.discount_amount);
        let discount_applied = order_record.total_amount - new_total;

        self.coupons_repository
            .insert_applied(&mut tx, order, coupon.uuid, discount_applied)
            .await?;

        let updated = self
            .orders_repository
            .set_total(&mut tx, order, new_total)
            .await?;

        tx.commit().await?;

        info!(
            coupon_uuid = %coupon.uuid,
            discount_applied,
            total_amount = updated.total_amount,
            "applied coupon to order"
        );

        Ok(AppliedCoupon {
            order_uuid: updated.uuid,
            code: coupon.code,
            discount_applied,
            total_amount: updated.total_amount,
        })
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Redeems a coupon against one of the user's pending orders, lowering
    /// the order total by the coupon's discount, clamped at zero.
    async fn apply_to_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
        code: &str,
    ) -> Result<AppliedCoupon, CouponsServiceError>;
}
