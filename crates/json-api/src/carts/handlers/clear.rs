//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Clear Cart Handler
///
/// Empties the caller's cart. Clearing a missing cart is a no-op.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .carts
        .clear_cart(user)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use till_app::domain::carts::MockCartsService;

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").delete(handler))
    }

    #[tokio::test]
    async fn test_clear_cart_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(()));

        carts.expect_add_line().never();
        carts.expect_set_line_quantity().never();
        carts.expect_remove_line().never();
        carts.expect_get_cart().never();

        let res = TestClient::delete("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
