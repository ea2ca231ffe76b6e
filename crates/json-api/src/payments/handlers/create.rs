//! Record Payment Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::orders::{
    PaymentMethod, PaymentStatus, data::NewPayment, records::PaymentRecord,
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Create Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePaymentRequest {
    /// The unique identifier of the order being paid
    pub order_uuid: Uuid,

    /// The payment method token
    pub method: String,

    /// The initial payment status token, pending when omitted
    #[serde(default = "default_payment_status")]
    pub status: String,
}

fn default_payment_status() -> String {
    PaymentStatus::Pending.to_string()
}

/// Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentResponse {
    /// The unique identifier of the payment
    pub uuid: Uuid,

    /// The unique identifier of the paid order
    pub order_uuid: Uuid,

    /// The payment method token
    pub method: String,

    /// The payment status token
    pub status: String,

    /// The charged amount, in minor units
    pub amount: u64,

    /// The date and time the payment was recorded
    pub created_at: String,

    /// The date and time the payment was last updated
    pub updated_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(payment: PaymentRecord) -> Self {
        Self {
            uuid: payment.uuid.into(),
            order_uuid: payment.order_uuid.into(),
            method: payment.payment_method.to_string(),
            status: payment.payment_status.to_string(),
            amount: payment.amount,
            created_at: payment.created_at.to_string(),
            updated_at: payment.updated_at.to_string(),
        }
    }
}

/// Record Payment Handler
///
/// Records a payment attempt against an order. The charged amount is the
/// order total at the time of recording, never client supplied.
#[endpoint(
    tags("payments"),
    summary = "Record Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Payment recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "A payment already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let request = json.into_inner();

    let method = request
        .method
        .parse::<PaymentMethod>()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown payment method"))?;

    let status = request
        .status
        .parse::<PaymentStatus>()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown payment status"))?;

    let payment = state
        .app
        .orders
        .record_payment(
            user,
            NewPayment {
                order_uuid: request.order_uuid.into(),
                method,
                status,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/payments/{}", payment.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(payment.into()))
}
