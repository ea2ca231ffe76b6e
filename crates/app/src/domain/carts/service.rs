//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartLine,
            errors::CartsServiceError,
            records::{Cart, CartLineRecord, CartLineUuid, CartUuid},
            repositories::{PgCartLinesRepository, PgCartsRepository},
        },
        catalog::repository::PgCatalogRepository,
    },
    identity::models::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
    catalog_repository: PgCatalogRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
            catalog_repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_line(
        &self,
        user: UserUuid,
        line: NewCartLine,
    ) -> Result<CartLineRecord, CartsServiceError> {
        if line.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        // Locks the cart row, serializing concurrent mutations per user.
        let cart = self
            .carts_repository
            .get_or_create_for_user(&mut tx, CartUuid::new(), user)
            .await?;

        let variant = self
            .catalog_repository
            .get_variant(&mut tx, line.variant_uuid)
            .await?
            .ok_or(CartsServiceError::VariantNotFound)?;

        let created = self
            .lines_repository
            .upsert_line(
                &mut tx,
                CartLineUuid::new(),
                cart.uuid,
                line.variant_uuid,
                line.quantity,
                variant.price,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn set_line_quantity(
        &self,
        user: UserUuid,
        line: CartLineUuid,
        quantity: u64,
    ) -> Result<Option<CartLineRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .lock_for_user(&mut tx, user)
            .await?
            .ok_or(CartsServiceError::LineNotFound)?;

        if quantity == 0 {
            let rows_affected = self
                .lines_repository
                .delete_line(&mut tx, cart.uuid, line)
                .await?;

            if rows_affected == 0 {
                return Err(CartsServiceError::LineNotFound);
            }

            tx.commit().await?;

            return Ok(None);
        }

        let updated = self
            .lines_repository
            .set_quantity(&mut tx, cart.uuid, line, quantity)
            .await?
            .ok_or(CartsServiceError::LineNotFound)?;

        tx.commit().await?;

        Ok(Some(updated))
    }

    async fn remove_line(
        &self,
        user: UserUuid,
        line: CartLineUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self
            .carts_repository
            .lock_for_user(&mut tx, user)
            .await?
            .ok_or(CartsServiceError::LineNotFound)?;

        let rows_affected = self
            .lines_repository
            .delete_line(&mut tx, cart.uuid, line)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::LineNotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_cart(&self, user: UserUuid) -> Result<Option<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self.carts_repository.get_for_user(&mut tx, user).await? else {
            return Ok(None);
        };

        let lines = self.lines_repository.list_lines(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(Some(Cart { cart, lines }))
    }

    async fn clear_cart(&self, user: UserUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(cart) = self.carts_repository.lock_for_user(&mut tx, user).await? else {
            return Ok(());
        };

        self.lines_repository.clear(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add a variant to the user's cart, merging into an existing line for
    /// the same variant. Creates the cart on first use.
    async fn add_line(
        &self,
        user: UserUuid,
        line: NewCartLine,
    ) -> Result<CartLineRecord, CartsServiceError>;

    /// Replace a line's quantity. Zero deletes the line and returns `None`.
    async fn set_line_quantity(
        &self,
        user: UserUuid,
        line: CartLineUuid,
        quantity: u64,
    ) -> Result<Option<CartLineRecord>, CartsServiceError>;

    /// Delete a line from the user's cart.
    async fn remove_line(&self, user: UserUuid, line: CartLineUuid)
    -> Result<(), CartsServiceError>;

    /// Retrieve the user's cart with its lines, if one exists yet.
    async fn get_cart(&self, user: UserUuid) -> Result<Option<Cart>, CartsServiceError>;

    /// Delete every line in the user's cart. A missing cart is a no-op.
    async fn clear_cart(&self, user: UserUuid) -> Result<(), CartsServiceError>;
}
