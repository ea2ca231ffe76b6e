//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::{coupons::CouponsServiceError, orders::OrdersServiceError};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => {
            StatusError::bad_request().brief("Cart has no lines to check out")
        }
        OrdersServiceError::ActiveOrderExists => {
            StatusError::conflict().brief("A pending order already exists")
        }
        OrdersServiceError::PaymentAlreadyExists => {
            StatusError::conflict().brief("A payment already exists for this order")
        }
        OrdersServiceError::InvalidOrderTransition { from, to } => {
            StatusError::conflict().brief(format!("Cannot move order from {from} to {to}"))
        }
        OrdersServiceError::InvalidPaymentTransition { from, to } => {
            StatusError::conflict().brief(format!("Cannot move payment from {from} to {to}"))
        }
        OrdersServiceError::NotFound | OrdersServiceError::PaymentNotFound => {
            StatusError::not_found()
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to process order request: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn coupon_into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::NotFound => StatusError::not_found().brief("Coupon not found"),
        CouponsServiceError::OrderNotFound => StatusError::not_found().brief("Order not found"),
        CouponsServiceError::Expired => {
            StatusError::bad_request().brief("Coupon is expired or inactive")
        }
        CouponsServiceError::AlreadyApplied => {
            StatusError::conflict().brief("A coupon has already been applied to this order")
        }
        CouponsServiceError::OrderNotPending => {
            StatusError::conflict().brief("Order is no longer pending")
        }
        CouponsServiceError::AlreadyExists
        | CouponsServiceError::InvalidReference
        | CouponsServiceError::MissingRequiredData
        | CouponsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid coupon payload")
        }
        CouponsServiceError::Sql(source) => {
            error!("failed to apply coupon: {source}");

            StatusError::internal_server_error()
        }
    }
}
