//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        addresses::PgAddressesService, carts::PgCartsService, catalog::PgCatalogService,
        coupons::PgCouponsService, orders::PgOrdersService,
    },
    identity::{NewUser, PgIdentityService, UserRecord, UserUuid},
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub user: UserRecord,
    pub addresses: PgAddressesService,
    pub carts: PgCartsService,
    pub catalog: PgCatalogService,
    pub coupons: PgCouponsService,
    pub identity: PgIdentityService,
    pub orders: PgOrdersService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let identity = PgIdentityService::new(test_db.pool().clone());

        let user = identity
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "shopper@example.com".to_string(),
            })
            .await
            .expect("Failed to create default test user")
            .user;

        Self {
            addresses: PgAddressesService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            catalog: PgCatalogService::new(db.clone()),
            coupons: PgCouponsService::new(db.clone()),
            orders: PgOrdersService::new(db),
            identity,
            user,
            db: test_db,
        }
    }

    /// Create an additional user — useful for ownership-scoping tests.
    pub async fn create_user(&self, email: &str) -> UserUuid {
        let issued = self
            .identity
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: email.to_string(),
            })
            .await
            .expect("Failed to create test user");

        issued.user.uuid
    }
}
