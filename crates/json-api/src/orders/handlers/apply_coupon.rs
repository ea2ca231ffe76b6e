//! Apply Coupon Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::coupons::records::AppliedCoupon;

use crate::{extensions::*, orders::errors::coupon_into_status_error, state::State};

/// Apply Coupon Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApplyCouponRequest {
    /// The coupon code to redeem
    pub code: String,
}

/// Coupon Applied Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponAppliedResponse {
    /// The unique identifier of the discounted order
    pub order_uuid: Uuid,

    /// The redeemed coupon code
    pub code: String,

    /// The amount subtracted from the order total, in minor units
    pub discount_applied: u64,

    /// The order total after the discount, in minor units
    pub total_amount: u64,
}

impl From<AppliedCoupon> for CouponAppliedResponse {
    fn from(applied: AppliedCoupon) -> Self {
        Self {
            order_uuid: applied.order_uuid.into(),
            code: applied.code,
            discount_applied: applied.discount_applied,
            total_amount: applied.total_amount,
        }
    }
}

/// Apply Coupon Handler
///
/// Redeems a coupon code against a pending order. An order takes at most one
/// coupon.
#[endpoint(
    tags("orders"),
    summary = "Apply Coupon to Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Coupon applied"),
        (status_code = StatusCode::NOT_FOUND, description = "Order or coupon not found"),
        (status_code = StatusCode::CONFLICT, description = "Already applied or order not pending"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<ApplyCouponRequest>,
    depot: &mut Depot,
) -> Result<Json<CouponAppliedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let applied = state
        .app
        .coupons
        .apply_to_order(user, order.into_inner().into(), &json.into_inner().code)
        .await
        .map_err(coupon_into_status_error)?;

    Ok(Json(applied.into()))
}
