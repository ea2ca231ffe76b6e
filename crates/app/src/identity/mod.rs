//! User identity and bearer-token authentication

mod errors;
pub mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
