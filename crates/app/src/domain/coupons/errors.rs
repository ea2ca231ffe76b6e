//! Coupons Service Errors

use sqlx::Error;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    #[error("coupon not found")]
    NotFound,

    #[error("order not found")]
    OrderNotFound,

    #[error("coupon is expired or inactive")]
    Expired,

    #[error("a coupon has already been applied to this order")]
    AlreadyApplied,

    #[error("order is no longer pending")]
    OrderNotPending,

    #[error("a coupon with this code already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CouponsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => {
                match error.as_database_error().and_then(DatabaseError::constraint) {
                    Some("order_coupons_pkey") => Self::AlreadyApplied,
                    _ => Self::AlreadyExists,
                }
            }
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
