//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use till_app::{
    context::AppContext,
    domain::{
        addresses::{
            MockAddressesService,
            records::{AddressRecord, AddressUuid},
        },
        carts::{
            MockCartsService,
            records::{Cart, CartLineRecord, CartLineUuid, CartRecord, CartUuid},
        },
        catalog::{
            MockCatalogService,
            records::{VariantRecord, VariantUuid},
        },
        coupons::MockCouponsService,
        orders::{
            MockOrdersService,
            records::{
                Order, OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid, PaymentRecord,
                PaymentUuid,
            },
            status::{OrderStatus, PaymentMethod, PaymentStatus},
        },
    },
    identity::{MockIdentityService, UserUuid},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_addresses_mock() -> MockAddressesService {
    let mut addresses = MockAddressesService::new();

    addresses.expect_create_address().never();
    addresses.expect_list_addresses().never();
    addresses.expect_delete_address().never();

    addresses
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_line().never();
    carts.expect_set_line_quantity().never();
    carts.expect_remove_line().never();
    carts.expect_get_cart().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_get_variant().never();

    catalog
}

fn strict_coupons_mock() -> MockCouponsService {
    let mut coupons = MockCouponsService::new();

    coupons.expect_apply_to_order().never();

    coupons
}

fn strict_identity_mock() -> MockIdentityService {
    let mut identity = MockIdentityService::new();

    identity.expect_authenticate_bearer().never();

    identity
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_get_order().never();
    orders.expect_set_order_status().never();
    orders.expect_record_payment().never();
    orders.expect_set_payment_status().never();

    orders
}

/// App context where every service refuses every call.
fn strict_app_context() -> AppContext {
    AppContext {
        addresses: Arc::new(strict_addresses_mock()),
        carts: Arc::new(strict_carts_mock()),
        catalog: Arc::new(strict_catalog_mock()),
        coupons: Arc::new(strict_coupons_mock()),
        identity: Arc::new(strict_identity_mock()),
        orders: Arc::new(strict_orders_mock()),
    }
}

pub(crate) fn state_with_addresses(addresses: MockAddressesService) -> Arc<State> {
    let mut app = strict_app_context();
    app.addresses = Arc::new(addresses);

    State::new(app)
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    let mut app = strict_app_context();
    app.carts = Arc::new(carts);

    State::new(app)
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    let mut app = strict_app_context();
    app.catalog = Arc::new(catalog);

    State::new(app)
}

pub(crate) fn state_with_coupons(coupons: MockCouponsService) -> Arc<State> {
    let mut app = strict_app_context();
    app.coupons = Arc::new(coupons);

    State::new(app)
}

pub(crate) fn state_with_identity(identity: MockIdentityService) -> Arc<State> {
    let mut app = strict_app_context();
    app.identity = Arc::new(identity);

    State::new(app)
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    let mut app = strict_app_context();
    app.orders = Arc::new(orders);

    State::new(app)
}

fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn addresses_service(addresses: MockAddressesService, route: Router) -> Service {
    service_with_state(state_with_addresses(addresses), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with_state(state_with_carts(carts), route)
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with_state(state_with_catalog(catalog), route)
}

pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    service_with_state(state_with_coupons(coupons), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with_state(state_with_orders(orders), route)
}

pub(crate) fn make_cart(uuid: CartUuid, lines: Vec<CartLineRecord>) -> Cart {
    Cart {
        cart: CartRecord {
            uuid,
            user_uuid: TEST_USER_UUID,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        lines,
    }
}

pub(crate) fn make_cart_line(
    uuid: CartLineUuid,
    quantity: u64,
    price_at_time: u64,
) -> CartLineRecord {
    CartLineRecord {
        uuid,
        cart_uuid: CartUuid::new(),
        variant_uuid: VariantUuid::new(),
        quantity,
        price_at_time,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order_record(uuid: OrderUuid, total_amount: u64) -> OrderRecord {
    OrderRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        order_status: OrderStatus::Pending,
        total_amount,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, total_amount: u64) -> Order {
    Order {
        order: make_order_record(uuid, total_amount),
        lines: vec![OrderLineRecord {
            uuid: OrderLineUuid::new(),
            order_uuid: uuid,
            variant_uuid: VariantUuid::new(),
            quantity: 1,
            price: total_amount,
        }],
    }
}

pub(crate) fn make_payment(uuid: PaymentUuid, order_uuid: OrderUuid, amount: u64) -> PaymentRecord {
    PaymentRecord {
        uuid,
        order_uuid,
        payment_method: PaymentMethod::CreditCard,
        payment_status: PaymentStatus::Pending,
        amount,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_address(uuid: AddressUuid) -> AddressRecord {
    AddressRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        address_line1: "1 Market Street".to_string(),
        address_line2: None,
        city: "Manchester".to_string(),
        state: "Greater Manchester".to_string(),
        postal_code: "M1 1AA".to_string(),
        country: "GB".to_string(),
        phone_number: "+441612345678".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_variant(uuid: VariantUuid) -> VariantRecord {
    VariantRecord {
        uuid,
        name: "Espresso Cup".to_string(),
        price: 12_50,
        stock_count: 40,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
