//! Coupon Records

use jiff::Timestamp;

use crate::domain::orders::records::OrderUuid;
use crate::uuids::TypedUuid;

pub type CouponUuid = TypedUuid<CouponRecord>;

/// `discount_amount` is a flat discount in minor units, clamped to the
/// order total when redeemed.
#[derive(Debug, Clone)]
pub struct CouponRecord {
    pub uuid: CouponUuid,
    pub code: String,
    pub discount_amount: u64,
    pub is_active: bool,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Redemption row tying a coupon to the single order it discounted.
#[derive(Debug, Clone)]
pub struct OrderCouponRecord {
    pub order_uuid: OrderUuid,
    pub coupon_uuid: CouponUuid,
    pub discount_applied: u64,
    pub created_at: Timestamp,
}

/// Outcome of a redemption: the discount actually taken and the new total.
#[derive(Debug, Clone)]
pub struct AppliedCoupon {
    pub order_uuid: OrderUuid,
    pub code: String,
    pub discount_applied: u64,
    pub total_amount: u64,
}
