//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::orders::records::{Order, OrderLineRecord};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The order status
    pub status: String,

    /// The order total in minor units, after any coupon
    pub total_amount: u64,

    /// The frozen order lines
    pub lines: Vec<OrderLineResponse>,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.order.uuid.into(),
            status: order.order.order_status.to_string(),
            total_amount: order.order.total_amount,
            created_at: order.order.created_at.to_string(),
            updated_at: order.order.updated_at.to_string(),
            lines: order
                .lines
                .into_iter()
                .map(OrderLineResponse::from)
                .collect(),
        }
    }
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// The unique identifier of the order line
    pub uuid: Uuid,

    /// The variant the line was frozen from
    pub variant_uuid: Uuid,

    /// Units of the variant ordered
    pub quantity: u64,

    /// Unit price in minor units, captured when the line entered the cart
    pub price: u64,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        Self {
            uuid: line.uuid.into(),
            variant_uuid: line.variant_uuid.into(),
            quantity: line.quantity,
            price: line.price,
        }
    }
}

/// Get Order Handler
///
/// Returns one of the caller's orders with its frozen lines.
#[endpoint(tags("orders"), summary = "Get Order", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let order = state
        .app
        .orders
        .get_order(user, order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use till_app::domain::orders::{MockOrdersService, OrdersServiceError, records::OrderUuid};

    use crate::test_helpers::{TEST_USER_UUID, make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{order}").get(handler))
    }

    fn strict_except_get(orders: &mut MockOrdersService) {
        orders.expect_checkout().never();
        orders.expect_set_order_status().never();
        orders.expect_record_payment().never();
        orders.expect_set_payment_status().never();
    }

    #[tokio::test]
    async fn test_get_order_returns_200() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, 20_00);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |user, o| *user == TEST_USER_UUID && *o == uuid)
            .return_once(move |_, _| Ok(order));

        strict_except_get(&mut orders);

        let mut res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "pending");
        assert_eq!(body.total_amount, 20_00);
        assert_eq!(body.lines.len(), 1, "expected the frozen line");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_404() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |user, o| *user == TEST_USER_UUID && *o == uuid)
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        strict_except_get(&mut orders);

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_order_invalid_uuid_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_get_order().never();

        strict_except_get(&mut orders);

        let res = TestClient::get("http://example.com/orders/123")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
