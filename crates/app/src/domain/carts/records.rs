//! Cart Records

use jiff::Timestamp;

use crate::{domain::catalog::records::VariantUuid, identity::models::UserUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Cart Line Record
///
/// `price_at_time` is the variant price captured when the line was first
/// added; merges increment `quantity` and leave it untouched.
#[derive(Debug, Clone)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub cart_uuid: CartUuid,
    pub variant_uuid: VariantUuid,
    pub quantity: u64,
    pub price_at_time: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLineRecord {
    /// Line subtotal in minor units.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.quantity.saturating_mul(self.price_at_time)
    }
}

/// Cart with its lines.
#[derive(Debug, Clone)]
pub struct Cart {
    pub cart: CartRecord,
    pub lines: Vec<CartLineRecord>,
}

impl Cart {
    /// Cart total in minor units.
    #[must_use]
    pub fn total(&self) -> u64 {
        lines_total(&self.lines)
    }
}

/// Sum of line totals in minor units, saturating rather than wrapping.
#[must_use]
pub fn lines_total(lines: &[CartLineRecord]) -> u64 {
    lines
        .iter()
        .map(CartLineRecord::line_total)
        .fold(0, u64::saturating_add)
}
