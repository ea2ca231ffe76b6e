//! Cart Line Routes

mod handlers;

pub(crate) use handlers::*;
