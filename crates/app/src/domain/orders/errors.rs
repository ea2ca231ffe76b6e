//! Orders Service Errors

use sqlx::Error;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::domain::orders::status::{OrderStatus, PaymentStatus};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart has no lines to check out")]
    EmptyCart,

    #[error("a pending order already exists for this user")]
    ActiveOrderExists,

    #[error("order not found")]
    NotFound,

    #[error("payment not found")]
    PaymentNotFound,

    #[error("a payment already exists for this order")]
    PaymentAlreadyExists,

    #[error("illegal order status transition: {from} to {to}")]
    InvalidOrderTransition { from: OrderStatus, to: OrderStatus },

    #[error("illegal payment status transition: {from} to {to}")]
    InvalidPaymentTransition { from: PaymentStatus, to: PaymentStatus },

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => {
                match error.as_database_error().and_then(DatabaseError::constraint) {
                    Some("payments_order_uuid_key") => Self::PaymentAlreadyExists,
                    _ => Self::ActiveOrderExists,
                }
            }
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
