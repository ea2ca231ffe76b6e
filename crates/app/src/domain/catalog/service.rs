//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::catalog::{
        data::NewVariant,
        errors::CatalogServiceError,
        records::{VariantRecord, VariantUuid},
        repository::PgCatalogRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgCatalogRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCatalogRepository::new(),
        }
    }

    /// Add a variant to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::AlreadyExists`] when the UUID is taken.
    #[tracing::instrument(
        name = "catalog.service.create_variant",
        skip(self, variant),
        fields(variant_uuid = %variant.uuid),
        err
    )]
    pub async fn create_variant(
        &self,
        variant: NewVariant,
    ) -> Result<VariantRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_variant(&mut tx, &variant).await?;

        tx.commit().await?;

        info!(variant_uuid = %created.uuid, "created variant");

        Ok(created)
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn get_variant(
        &self,
        variant: VariantUuid,
    ) -> Result<VariantRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .get_variant(&mut tx, variant)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve a single variant by UUID.
    async fn get_variant(&self, variant: VariantUuid)
    -> Result<VariantRecord, CatalogServiceError>;
}
