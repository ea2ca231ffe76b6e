//! Order Handlers

pub(crate) mod apply_coupon;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod update;
