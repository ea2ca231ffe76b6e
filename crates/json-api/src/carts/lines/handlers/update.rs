//! Update Cart Line Handler

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

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Update Cart Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartLineRequest {
    pub quantity: u64,
}

/// Cart Line Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineUpdatedResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The quantity after the update; zero means the line was removed
    pub quantity: u64,
}

/// Update Cart Line Handler
///
/// Replaces a line's quantity. Zero removes the line.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    json: JsonBody<UpdateCartLineRequest>,
    depot: &mut Depot,
) -> Result<Json<CartLineUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;
    let line = line.into_inner();

    let updated = state
        .app
        .carts
        .set_line_quantity(user, line.into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartLineUpdatedResponse {
        uuid: line,
        quantity: updated.map_or(0, |record| record.quantity),
    }))
}
