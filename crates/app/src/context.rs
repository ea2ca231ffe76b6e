//! App Context

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::{
    database::Db,
    domain::{
        addresses::{AddressesService, PgAddressesService},
        carts::{CartsService, PgCartsService},
        catalog::{CatalogService, PgCatalogService},
        coupons::{CouponsService, PgCouponsService},
        orders::{OrdersService, PgOrdersService},
    },
    identity::{IdentityService, PgIdentityService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub addresses: Arc<dyn AddressesService>,
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub coupons: Arc<dyn CouponsService>,
    pub identity: Arc<dyn IdentityService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL with a bounded
    /// connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            addresses: Arc::new(PgAddressesService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            catalog: Arc::new(PgCatalogService::new(db.clone())),
            coupons: Arc::new(PgCouponsService::new(db.clone())),
            identity: Arc::new(PgIdentityService::new(pool)),
            orders: Arc::new(PgOrdersService::new(db)),
        })
    }
}
