//! Till Domain Concerns

pub mod addresses;
pub mod carts;
pub mod catalog;
pub mod coupons;
pub mod orders;
