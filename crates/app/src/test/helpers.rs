//! Test Helpers

use testresult::TestResult;

use crate::{
    domain::{
        carts::{CartsService, data::NewCartLine},
        catalog::{
            CatalogServiceError,
            data::NewVariant,
            records::{VariantRecord, VariantUuid},
        },
        orders::{OrdersService, records::Order},
    },
    test::TestContext,
};

pub(crate) async fn create_variant(
    ctx: &TestContext,
    price: u64,
    stock_count: u64,
) -> Result<VariantRecord, CatalogServiceError> {
    ctx.catalog
        .create_variant(NewVariant {
            uuid: VariantUuid::new(),
            name: "Test Variant".to_string(),
            price,
            stock_count,
        })
        .await
}

/// Builds a one-line cart at the given price and quantity and checks it out.
pub(crate) async fn checkout_order(
    ctx: &TestContext,
    price: u64,
    quantity: u64,
) -> TestResult<Order> {
    let variant = create_variant(ctx, price, 100).await?;

    ctx.carts
        .add_line(
            ctx.user.uuid,
            NewCartLine {
                variant_uuid: variant.uuid,
                quantity,
            },
        )
        .await?;

    let order = ctx.orders.checkout(ctx.user.uuid).await?;

    Ok(order)
}
