//! Add Cart Line Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::carts::data::NewCartLine;

use crate::{
    carts::{errors::into_status_error, get::CartLineResponse},
    extensions::*,
    state::State,
};

/// Add Cart Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartLineRequest {
    pub variant_uuid: Uuid,
    pub quantity: u64,
}

impl From<CreateCartLineRequest> for NewCartLine {
    fn from(request: CreateCartLineRequest) -> Self {
        NewCartLine {
            variant_uuid: request.variant_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Line Handler
///
/// Adds a variant to the caller's cart. A line already holding the variant
/// absorbs the quantity instead of duplicating.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Line",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartLineRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let line = state
        .app
        .carts
        .add_line(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/lines/{}", line.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use till_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartLineUuid},
        catalog::records::VariantUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, carts_service, make_cart_line};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/lines").post(handler))
    }

    fn strict_except_add(carts: &mut MockCartsService) {
        carts.expect_set_line_quantity().never();
        carts.expect_remove_line().never();
        carts.expect_get_cart().never();
        carts.expect_clear_cart().never();
    }

    #[tokio::test]
    async fn test_add_line_returns_201_with_location() -> TestResult {
        let variant = VariantUuid::new();
        let line_uuid = CartLineUuid::new();

        let mut line = make_cart_line(line_uuid, 2, 5_00);
        line.variant_uuid = variant;

        let mut carts = MockCartsService::new();

        carts
            .expect_add_line()
            .once()
            .withf(move |user, new| {
                *user == TEST_USER_UUID
                    && *new
                        == NewCartLine {
                            variant_uuid: variant,
                            quantity: 2,
                        }
            })
            .return_once(move |_, _| Ok(line));

        strict_except_add(&mut carts);

        let mut res = TestClient::post("http://example.com/cart/lines")
            .json(&json!({ "variant_uuid": variant.into_uuid(), "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartLineResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/cart/lines/{line_uuid}").as_str()));
        assert_eq!(body.uuid, line_uuid.into_uuid());
        assert_eq!(body.quantity, 2);
        assert_eq!(body.line_total, 10_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_merges_into_existing_line() -> TestResult {
        let variant = VariantUuid::new();
        let line_uuid = CartLineUuid::new();

        let mut line = make_cart_line(line_uuid, 5, 5_00);
        line.variant_uuid = variant;

        let mut carts = MockCartsService::new();

        carts
            .expect_add_line()
            .once()
            .withf(move |user, new| *user == TEST_USER_UUID && new.quantity == 2)
            .return_once(move |_, _| Ok(line));

        strict_except_add(&mut carts);

        let mut res = TestClient::post("http://example.com/cart/lines")
            .json(&json!({ "variant_uuid": variant.into_uuid(), "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartLineResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.quantity, 5, "expected merged quantity");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_unknown_variant_returns_400() -> TestResult {
        let variant = VariantUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_line()
            .once()
            .return_once(|_, _| Err(CartsServiceError::VariantNotFound));

        strict_except_add(&mut carts);

        let res = TestClient::post("http://example.com/cart/lines")
            .json(&json!({ "variant_uuid": variant.into_uuid(), "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_line_zero_quantity_returns_400() -> TestResult {
        let variant = VariantUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_add_line()
            .once()
            .return_once(|_, _| Err(CartsServiceError::InvalidQuantity));

        strict_except_add(&mut carts);

        let res = TestClient::post("http://example.com/cart/lines")
            .json(&json!({ "variant_uuid": variant.into_uuid(), "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
