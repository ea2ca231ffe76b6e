//! Get Variant Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::catalog::records::VariantRecord;

use crate::{extensions::*, state::State, variants::errors::into_status_error};

/// Variant Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantResponse {
    /// The unique identifier of the variant
    pub uuid: Uuid,

    /// The display name of the variant
    pub name: String,

    /// The current unit price, in minor units
    pub price: u64,

    /// The number of units in stock
    pub stock_count: u64,

    /// The date and time the variant was created
    pub created_at: String,

    /// The date and time the variant was last updated
    pub updated_at: String,
}

impl From<VariantRecord> for VariantResponse {
    fn from(variant: VariantRecord) -> Self {
        Self {
            uuid: variant.uuid.into(),
            name: variant.name,
            price: variant.price,
            stock_count: variant.stock_count,
            created_at: variant.created_at.to_string(),
            updated_at: variant.updated_at.to_string(),
        }
    }
}

/// Get Variant Handler
///
/// Returns the variant's current price and stock. Cart lines keep the price
/// captured when they were added, which may differ from this value.
#[endpoint(
    tags("variants"),
    summary = "Get Variant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Variant retrieved"),
        (status_code = StatusCode::NOT_FOUND, description = "Variant not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    variant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<VariantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let variant = state
        .app
        .catalog
        .get_variant(variant.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(variant.into()))
}
