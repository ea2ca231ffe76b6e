//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use till_app::identity::UserUuid;

const USER_UUID_DEPOT_KEY: &str = "user_uuid";

/// Helpers for typed depot access from handlers.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the authenticated caller for downstream handlers.
    fn insert_user_uuid(&mut self, user: UserUuid);

    /// Retrieve the authenticated caller placed by the auth middleware.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_DEPOT_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.get::<UserUuid>(USER_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }
}
