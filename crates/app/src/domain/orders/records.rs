//! Order Records

use jiff::Timestamp;

use crate::domain::catalog::records::VariantUuid;
use crate::domain::orders::status::{OrderStatus, PaymentMethod, PaymentStatus};
use crate::identity::UserUuid;
use crate::uuids::TypedUuid;

pub type OrderUuid = TypedUuid<OrderRecord>;

#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub order_status: OrderStatus,
    pub total_amount: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Frozen copy of a cart line taken at checkout. Never updated afterwards.
#[derive(Debug, Clone)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub order_uuid: OrderUuid,
    pub variant_uuid: VariantUuid,
    pub quantity: u64,
    pub price: u64,
}

/// An order with its frozen lines.
#[derive(Debug, Clone)]
pub struct Order {
    pub order: OrderRecord,
    pub lines: Vec<OrderLineRecord>,
}

pub type PaymentUuid = TypedUuid<PaymentRecord>;

#[derive(Debug, Clone)]
pub struct PaymentRecord {
    pub uuid: PaymentUuid,
    pub order_uuid: OrderUuid,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub amount: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
