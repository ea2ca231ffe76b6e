//! Variants Handlers

pub(crate) mod get;
