//! Addresses Error Handling

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::addresses::AddressesServiceError;

/// Maps an `AddressesServiceError` to an appropriate `StatusError`.
pub(crate) fn into_status_error(error: AddressesServiceError) -> StatusError {
    match error {
        AddressesServiceError::NotFound => StatusError::not_found(),
        AddressesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Address already exists")
        }
        AddressesServiceError::InvalidReference
        | AddressesServiceError::MissingRequiredData
        | AddressesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid address payload")
        }
        AddressesServiceError::Sql(source) => {
            error!("failed to process address request: {source}");

            StatusError::internal_server_error()
        }
    }
}
