//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::carts::records::{Cart, CartLineRecord};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart, absent before the first add
    pub uuid: Option<Uuid>,

    /// The lines in the cart
    pub lines: Vec<CartLineResponse>,

    /// The cart total in minor units
    pub total: u64,
}

impl CartResponse {
    fn empty() -> Self {
        Self {
            uuid: None,
            lines: Vec::new(),
            total: 0,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: Some(cart.cart.uuid.into()),
            total: cart.total(),
            lines: cart.lines.into_iter().map(CartLineResponse::from).collect(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The variant held by the line
    pub variant_uuid: Uuid,

    /// Units of the variant in the cart
    pub quantity: u64,

    /// Unit price in minor units, captured when the line was first added
    pub price_at_time: u64,

    /// Line subtotal in minor units
    pub line_total: u64,

    /// The date and time the line was created
    pub created_at: String,

    /// The date and time the line was last updated
    pub updated_at: String,
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            uuid: line.uuid.into(),
            variant_uuid: line.variant_uuid.into(),
            quantity: line.quantity,
            price_at_time: line.price_at_time,
            line_total: line.line_total(),
            created_at: line.created_at.to_string(),
            updated_at: line.updated_at.to_string(),
        }
    }
}

/// Get Cart Handler
///
/// Returns the caller's cart with its lines and running total. A missing
/// cart renders as an empty one.
#[endpoint(tags("cart"), summary = "Get Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.map_or_else(CartResponse::empty, CartResponse::from)))
}
