//! New Shipping Address Data

use crate::domain::addresses::records::AddressUuid;

#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub uuid: AddressUuid,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
}
