//! Cart Data

use crate::domain::catalog::records::VariantUuid;

/// New Cart Line Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub variant_uuid: VariantUuid,
    pub quantity: u64,
}
