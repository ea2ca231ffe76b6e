//! New Payment Data

use crate::domain::orders::records::OrderUuid;
use crate::domain::orders::status::{PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub order_uuid: OrderUuid,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
}
