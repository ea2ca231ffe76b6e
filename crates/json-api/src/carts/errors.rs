//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::VariantNotFound => StatusError::bad_request().brief("Unknown variant"),
        CartsServiceError::LineNotFound => StatusError::not_found(),
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be at least 1")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("failed to process cart request: {source}");

            StatusError::internal_server_error()
        }
    }
}
