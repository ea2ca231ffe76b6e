//! Catalog Data

use crate::domain::catalog::records::VariantUuid;

/// New Variant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub uuid: VariantUuid,
    pub name: String,
    pub price: u64,
    pub stock_count: u64,
}
