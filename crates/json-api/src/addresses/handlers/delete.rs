//! Delete Address Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{addresses::errors::into_status_error, extensions::*, state::State};

/// Delete Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Delete Address",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Address deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    address: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .addresses
        .delete_address(user, address.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
