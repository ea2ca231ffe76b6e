//! Identity service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    database::Db,
    identity::{
        errors::IdentityServiceError,
        models::{IssuedUser, NewUser, UserUuid},
        repository::PgIdentityRepository,
        token::{generate_api_token, hash_api_token},
    },
};

#[derive(Debug, Clone)]
pub struct PgIdentityService {
    db: Db,
    repository: PgIdentityRepository,
}

impl PgIdentityService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Db::new(pool.clone()),
            repository: PgIdentityRepository::new(pool),
        }
    }

    /// Create a user and issue their API token.
    ///
    /// The raw token is returned exactly once; only its hash is stored.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::AlreadyExists`] when the email is
    /// already registered.
    #[tracing::instrument(
        name = "identity.service.create_user",
        skip(self, user),
        fields(user_uuid = tracing::field::Empty),
        err
    )]
    pub async fn create_user(&self, user: NewUser) -> Result<IssuedUser, IdentityServiceError> {
        let raw_token = generate_api_token();
        let token_hash = hash_api_token(&raw_token);

        let mut tx = self.db.begin().await?;

        let record = self.repository.create_user(&mut tx, &user).await?;

        self.repository
            .create_api_token(&mut tx, record.uuid, &token_hash)
            .await?;

        tx.commit().await?;

        tracing::Span::current().record("user_uuid", tracing::field::display(record.uuid));

        info!(user_uuid = %record.uuid, "created user");

        Ok(IssuedUser {
            user: record,
            api_token: raw_token,
        })
    }
}

#[async_trait]
impl IdentityService for PgIdentityService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<UserUuid, IdentityServiceError> {
        let hash = hash_api_token(bearer_token);

        self.repository
            .find_user_by_token_hash(&hash)
            .await
            .map_err(IdentityServiceError::from)?
            .ok_or(IdentityServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Resolve a raw bearer token to the user that owns it.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<UserUuid, IdentityServiceError>;
}
