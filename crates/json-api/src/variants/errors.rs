//! Variants Error Handling

use salvo::http::StatusError;
use tracing::error;

use till_app::domain::catalog::CatalogServiceError;

/// Maps a `CatalogServiceError` to an appropriate `StatusError`.
pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found(),
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Variant already exists")
        }
        CatalogServiceError::InvalidReference
        | CatalogServiceError::MissingRequiredData
        | CatalogServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid variant payload")
        }
        CatalogServiceError::Sql(source) => {
            error!("failed to process variant request: {source}");

            StatusError::internal_server_error()
        }
    }
}
