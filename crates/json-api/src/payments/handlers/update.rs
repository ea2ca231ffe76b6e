//! Update Payment Status Handler

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

use till_app::domain::orders::PaymentStatus;

use crate::{
    extensions::*, orders::errors::into_status_error, payments::create::PaymentResponse,
    state::State,
};

/// Update Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePaymentRequest {
    /// The target payment status token
    pub status: String,
}

/// Update Payment Status Handler
///
/// Settles a pending payment as completed or failed. A completed payment
/// remains completed.
#[endpoint(
    tags("payments"),
    summary = "Update Payment Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment status updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment not found"),
        (status_code = StatusCode::CONFLICT, description = "Illegal status transition"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    payment: PathParam<Uuid>,
    json: JsonBody<UpdatePaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let status = json
        .into_inner()
        .status
        .parse::<PaymentStatus>()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown payment status"))?;

    let payment = state
        .app
        .orders
        .set_payment_status(user, payment.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(payment.into()))
}
