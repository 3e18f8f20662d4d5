//! Fixed-locale number formatting for the printable proposal.
//!
//! The artifact is formatted for the Turkish market: a dot groups thousands
//! and a comma separates decimals (`1.234,56`). This is a fixed convention
//! of the document, not a configurable locale layer.

use proposal_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats a monetary amount with exactly two fraction digits, dot
/// thousands separators and a comma decimal separator.
///
/// The value is rounded half-away-from-zero to two decimal places first.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    // Two fraction digits, zero-padded; the value already has at most two.
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push(',');
    out.push_str(frac_part);
    out
}

/// Formats a measured quantity (area, pipe length, density) without padded
/// zeros: trailing fraction zeros are dropped and the decimal separator is
/// a comma. Whole numbers carry no separator at all.
pub fn format_quantity(value: Decimal) -> String {
    let normalized = value.normalize();
    normalized.to_string().replace('.', ",")
}

/// Groups an unsigned ASCII digit run into thousands with dots.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
