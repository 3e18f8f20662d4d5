use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Unit label assigned to a freshly added material line ("Ad." = piece).
pub const DEFAULT_UNIT: &str = "Ad.";

/// One purchasable item on the materials page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub id: EntityId,
    pub product_code: String,
    pub description: String,
    pub dimensions: String,
    pub request_qty: Decimal,
    /// Shipped quantity. Carried on the record but not consulted by any
    /// derivation.
    pub ship_qty: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    /// Manual override for the line total. `None` means the total is derived
    /// from `request_qty * unit_price`; clearing the override reverts to the
    /// computed product, never to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_total: Option<Decimal>,
}

impl MaterialLine {
    /// A blank line: empty text fields, zero quantities and price, the
    /// generic unit label, no override.
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            product_code: String::new(),
            description: String::new(),
            dimensions: String::new(),
            request_qty: Decimal::ZERO,
            ship_qty: Decimal::ZERO,
            unit: DEFAULT_UNIT.to_string(),
            unit_price: Decimal::ZERO,
            manual_total: None,
        }
    }
}
