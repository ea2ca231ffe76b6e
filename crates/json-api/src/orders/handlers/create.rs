//! Checkout Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    observability,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Checkout Handler
///
/// Freezes the caller's cart lines into a new pending order and empties
/// the cart.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::CONFLICT, description = "A pending order already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let order = state
        .app
        .orders
        .checkout(user)
        .await
        .map_err(into_status_error)?;

    observability::observe_order_placed();

    res.add_header(LOCATION, format!("/orders/{}", order.order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

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
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    fn strict_except_checkout(orders: &mut MockOrdersService) {
        orders.expect_get_order().never();
        orders.expect_set_order_status().never();
        orders.expect_record_payment().never();
        orders.expect_set_payment_status().never();
    }

    #[tokio::test]
    async fn test_checkout_returns_201_with_location() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid, 20_00);

        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(order));

        strict_except_checkout(&mut orders);

        let mut res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.status, "pending");
        assert_eq!(body.total_amount, 20_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        strict_except_checkout(&mut orders);

        let res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_with_pending_order_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Err(OrdersServiceError::ActiveOrderExists));

        strict_except_checkout(&mut orders);

        let res = TestClient::post("http://example.com/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
