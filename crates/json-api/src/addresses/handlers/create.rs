//! Create Address Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::addresses::{data::NewAddress, records::AddressRecord};

use crate::{addresses::errors::into_status_error, extensions::*, state::State};

/// Create Address Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAddressRequest {
    /// The client supplied unique identifier of the address
    pub uuid: Uuid,

    /// The first address line
    pub address_line1: String,

    /// The optional second address line
    pub address_line2: Option<String>,

    /// The city
    pub city: String,

    /// The state, province or county
    pub state: String,

    /// The postal code
    pub postal_code: String,

    /// The country
    pub country: String,

    /// The contact phone number
    pub phone_number: String,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(request: CreateAddressRequest) -> Self {
        Self {
            uuid: request.uuid.into(),
            address_line1: request.address_line1,
            address_line2: request.address_line2,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
            phone_number: request.phone_number,
        }
    }
}

/// Address Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressResponse {
    /// The unique identifier of the address
    pub uuid: Uuid,

    /// The first address line
    pub address_line1: String,

    /// The optional second address line
    pub address_line2: Option<String>,

    /// The city
    pub city: String,

    /// The state, province or county
    pub state: String,

    /// The postal code
    pub postal_code: String,

    /// The country
    pub country: String,

    /// The contact phone number
    pub phone_number: String,

    /// The date and time the address was created
    pub created_at: String,

    /// The date and time the address was last updated
    pub updated_at: String,
}

impl From<AddressRecord> for AddressResponse {
    fn from(address: AddressRecord) -> Self {
        Self {
            uuid: address.uuid.into(),
            address_line1: address.address_line1,
            address_line2: address.address_line2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            phone_number: address.phone_number,
            created_at: address.created_at.to_string(),
            updated_at: address.updated_at.to_string(),
        }
    }
}

/// Create Address Handler
///
/// Stores a shipping address for the caller. The identifier is client
/// supplied so retried requests stay idempotent.
#[endpoint(
    tags("addresses"),
    summary = "Create Address",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Address created"),
        (status_code = StatusCode::CONFLICT, description = "Address already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAddressRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let address = state
        .app
        .addresses
        .create_address(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/addresses/{}", address.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(address.into()))
}
