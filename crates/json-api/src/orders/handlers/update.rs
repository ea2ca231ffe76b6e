//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::orders::OrderStatus;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Update Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    /// The target order status token
    pub status: String,
}

/// Order Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderUpdatedResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The order status after the transition
    pub status: String,
}

/// Update Order Status Handler
///
/// Advances the order through its status machine.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order status updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Illegal status transition"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown order status"))?;

    let order = state
        .app
        .orders
        .set_order_status(user, order.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderUpdatedResponse {
        uuid: order.uuid.into(),
        status: order.order_status.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use till_app::domain::orders::{
        MockOrdersService, OrderStatus, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, make_order_record, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders/{order}").patch(handler))
    }

    fn strict_except_update(orders: &mut MockOrdersService) {
        orders.expect_checkout().never();
        orders.expect_get_order().never();
        orders.expect_record_payment().never();
        orders.expect_set_payment_status().never();
    }

    #[tokio::test]
    async fn test_update_order_status_returns_200() -> TestResult {
        let uuid = OrderUuid::new();

        let mut record = make_order_record(uuid, 20_00);
        record.order_status = OrderStatus::Shipped;

        let mut orders = MockOrdersService::new();

        orders
            .expect_set_order_status()
            .once()
            .withf(move |user, o, status| {
                *user == TEST_USER_UUID && *o == uuid && *status == OrderStatus::Shipped
            })
            .return_once(move |_, _, _| Ok(record));

        strict_except_update(&mut orders);

        let mut res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(orders))
            .await;

        let body: OrderUpdatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "shipped");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_unknown_status_returns_400() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders.expect_set_order_status().never();

        strict_except_update(&mut orders);

        let res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "teleported" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_illegal_transition_returns_409() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_set_order_status()
            .once()
            .return_once(|_, _, _| {
                Err(OrdersServiceError::InvalidOrderTransition {
                    from: OrderStatus::Pending,
                    to: OrderStatus::Delivered,
                })
            });

        strict_except_update(&mut orders);

        let res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "delivered" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_order_returns_404() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_set_order_status()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::NotFound));

        strict_except_update(&mut orders);

        let res = TestClient::patch(format!("http://example.com/orders/{uuid}"))
            .json(&json!({ "status": "canceled" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
