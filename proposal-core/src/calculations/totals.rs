//! Line-total and grand-total policy for the materials list.
//!
//! Two levels of optional override shape every amount the proposal shows:
//!
//! | Level      | Field                        | Wins when      |
//! |------------|------------------------------|----------------|
//! | Line       | `MaterialLine::manual_total` | set (any value)|
//! | Grand total| `ProposalDocument::manual_total` | set and > 0 |
//!
//! A cleared line override reverts the line to `request_qty * unit_price`.
//! A grand-total override of zero is treated the same as no override at all;
//! both fall back to the computed sum.
//!
//! Totals are exact [`Decimal`] sums; nothing is rounded here. Rounding to
//! two fraction digits happens only at display time.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proposal_core::ProposalDocument;
//! use proposal_core::MaterialLineUpdate;
//!
//! let mut doc = ProposalDocument::new(chrono::NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
//! let line = doc.add_material_line();
//! doc.update_material_line(line, MaterialLineUpdate::RequestQty(dec!(238)));
//! doc.update_material_line(line, MaterialLineUpdate::UnitPrice(dec!(1.20)));
//!
//! assert_eq!(doc.calculated_total(), dec!(285.60));
//!
//! doc.manual_total = Some(dec!(500));
//! assert_eq!(doc.display_total(), dec!(500));
//! ```

use rust_decimal::Decimal;

use crate::models::MaterialLine;

/// The amount a material line contributes to the grand total: the manual
/// override when set, otherwise `request_qty * unit_price`.
pub fn effective_line_total(line: &MaterialLine) -> Decimal {
    line.manual_total
        .unwrap_or_else(|| line.request_qty * line.unit_price)
}

/// Sum of the effective totals of all material lines.
pub fn calculated_total(lines: &[MaterialLine]) -> Decimal {
    lines.iter().map(effective_line_total).sum()
}

/// The authoritative grand total: `manual_total` when it is set and strictly
/// positive, otherwise the computed sum. Zero and unset are equivalent
/// "no override" signals.
pub fn display_total(
    manual_total: Option<Decimal>,
    calculated: Decimal,
) -> Decimal {
    match manual_total {
        Some(total) if total > Decimal::ZERO => total,
        _ => calculated,
    }
}
