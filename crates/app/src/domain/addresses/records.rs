//! Shipping Address Records

use jiff::Timestamp;

use crate::identity::UserUuid;
use crate::uuids::TypedUuid;

pub type AddressUuid = TypedUuid<AddressRecord>;

#[derive(Debug, Clone)]
pub struct AddressRecord {
    pub uuid: AddressUuid,
    pub user_uuid: UserUuid,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
