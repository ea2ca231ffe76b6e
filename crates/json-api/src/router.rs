//! App Router

use salvo::Router;

use crate::{addresses, auth, carts, orders, payments, variants};

pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .delete(carts::clear::handler)
                .push(
                    Router::with_path("lines")
                        .post(carts::lines::create::handler)
                        .push(
                            Router::with_path("{line}")
                                .patch(carts::lines::update::handler)
                                .delete(carts::lines::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .patch(orders::update::handler)
                        .push(Router::with_path("coupon").post(orders::apply_coupon::handler)),
                ),
        )
        .push(
            Router::with_path("payments")
                .post(payments::create::handler)
                .push(Router::with_path("{payment}").patch(payments::update::handler)),
        )
        .push(
            Router::with_path("addresses")
                .get(addresses::index::handler)
                .post(addresses::create::handler)
                .push(Router::with_path("{address}").delete(addresses::delete::handler)),
        )
        .push(Router::with_path("variants/{variant}").get(variants::get::handler))
}
