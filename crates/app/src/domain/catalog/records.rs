//! Catalog Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Variant UUID
pub type VariantUuid = TypedUuid<VariantRecord>;

/// Sellable product variant snapshot.
///
/// `price` and amounts elsewhere in the crate are integer minor units.
#[derive(Debug, Clone)]
pub struct VariantRecord {
    pub uuid: VariantUuid,
    pub name: String,
    pub price: u64,
    pub stock_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
