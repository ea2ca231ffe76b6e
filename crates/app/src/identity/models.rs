//! Identity data models.

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Registered shopper account.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New user persistence payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
}

/// User creation result with one-time raw API token.
#[derive(Debug, Clone)]
pub struct IssuedUser {
    pub user: UserRecord,
    pub api_token: String,
}
