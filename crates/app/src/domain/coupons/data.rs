//! New Coupon Data

use jiff::Timestamp;

use crate::domain::coupons::records::CouponUuid;

#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub uuid: CouponUuid,
    pub code: String,
    pub discount_amount: u64,
    pub expires_at: Timestamp,
}
