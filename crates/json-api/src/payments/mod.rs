//! Payments
//!
//! Payment attempts recorded against orders. Error mapping lives with the
//! orders module since payments share its service error type.

mod handlers;

pub(crate) use handlers::*;
