//! Shipping Addresses Service

use async_trait::async_trait;
use mockall::automock;

use crate::database::Db;
use crate::domain::addresses::data::NewAddress;
use crate::domain::addresses::errors::AddressesServiceError;
use crate::domain::addresses::records::{AddressRecord, AddressUuid};
use crate::domain::addresses::repository::PgAddressesRepository;
use crate::identity::UserUuid;

#[derive(Debug, Clone)]
pub struct PgAddressesService {
    db: Db,
    repository: PgAddressesRepository,
}

impl PgAddressesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAddressesRepository::new(),
        }
    }
}

#[async_trait]
impl AddressesService for PgAddressesService {
    async fn create_address(
        &self,
        user: UserUuid,
        new_address: NewAddress,
    ) -> Result<AddressRecord, AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let address = self.repository.create(&mut tx, user, &new_address).await?;

        tx.commit().await?;

        Ok(address)
    }

    async fn list_addresses(
        &self,
        user: UserUuid,
    ) -> Result<Vec<AddressRecord>, AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let addresses = self.repository.list_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(addresses)
    }

    async fn delete_address(
        &self,
        user: UserUuid,
        address: AddressUuid,
    ) -> Result<(), AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete(&mut tx, address, user).await?;

        if deleted == 0 {
            return Err(AddressesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// Stores a shipping address for the user.
    async fn create_address(
        &self,
        user: UserUuid,
        new_address: NewAddress,
    ) -> Result<AddressRecord, AddressesServiceError>;

    /// Lists the user's shipping addresses, oldest first.
    async fn list_addresses(
        &self,
        user: UserUuid,
    ) -> Result<Vec<AddressRecord>, AddressesServiceError>;

    /// Deletes one of the user's shipping addresses.
    async fn delete_address(
        &self,
        user: UserUuid,
        address: AddressUuid,
    ) -> Result<(), AddressesServiceError>;
}
