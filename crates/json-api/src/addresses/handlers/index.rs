//! List Addresses Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    addresses::{create::AddressResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Addresses Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressesResponse {
    /// The caller's stored addresses
    pub addresses: Vec<AddressResponse>,
}

/// List Addresses Handler
#[endpoint(
    tags("addresses"),
    summary = "List Addresses",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Addresses retrieved"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AddressesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let addresses = state
        .app
        .addresses
        .list_addresses(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(AddressesResponse {
        addresses: addresses.into_iter().map(AddressResponse::from).collect(),
    }))
}
