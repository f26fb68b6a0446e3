//! Formats monetary amounts for display.
//!
//! Amounts are rendered in the Indian rupee style: the `₹` symbol, the last
//! three integer digits grouped together and every two digits before that
//! (e.g. `₹12,34,567`), and at most two fraction digits with trailing zeros
//! dropped (`₹1,234.5`, `₹1,234`).

use num_format::{Locale, ToFormattedString};

use crate::transaction::TransactionKind;

/// The currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format `amount` as a currency string, e.g. `₹1,23,456.78`.
///
/// Negative amounts are prefixed with an explicit minus sign before the symbol
/// (`-₹500`). Non-finite values are rendered as zero.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        tracing::warn!("cannot format the non-finite amount {amount}, rendering as zero");
        return format!("{CURRENCY_SYMBOL}0");
    }

    let magnitude = format_magnitude(amount.abs());

    // Check the sign after rounding so that e.g. -0.001 renders as "₹0", not "-₹0".
    if amount < 0.0 && magnitude != "0" {
        format!("-{CURRENCY_SYMBOL}{magnitude}")
    } else {
        format!("{CURRENCY_SYMBOL}{magnitude}")
    }
}

/// Format the magnitude of `amount` with a sign given by `kind`: `+₹500` for
/// income and `-₹500` for expenses.
///
/// Stored amounts are never negative, the direction only comes from the kind.
pub fn format_signed(amount: f64, kind: TransactionKind) -> String {
    let sign = match kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };

    let unsigned = format_currency(amount.abs());

    format!("{sign}{unsigned}")
}

/// Round to whole paise, group the rupees with the `en_IN` locale and drop
/// trailing zeros from the paise.
fn format_magnitude(magnitude: f64) -> String {
    // Saturates for amounts beyond the range of u64.
    let paise = (magnitude * 100.0).round() as u64;
    let rupees = (paise / 100).to_formatted_string(&Locale::en_IN);

    match paise % 100 {
        0 => rupees,
        fraction if fraction % 10 == 0 => format!("{rupees}.{}", fraction / 10),
        fraction => format!("{rupees}.{fraction:02}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::transaction::TransactionKind;

    use super::{format_currency, format_signed};

    #[test]
    fn formats_zero_without_fraction_digits() {
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn groups_digits_in_the_indian_style() {
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(1234.0), "₹1,234");
        assert_eq!(format_currency(100000.0), "₹1,00,000");
        assert_eq!(format_currency(1234567.0), "₹12,34,567");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn only_shows_fraction_digits_when_needed() {
        assert_eq!(format_currency(1234.5), "₹1,234.5");
        assert_eq!(format_currency(12.25), "₹12.25");
        assert_eq!(format_currency(99.999), "₹100");
    }

    #[test]
    fn negative_amounts_have_an_explicit_sign() {
        assert_eq!(format_currency(-500.0), "-₹500");
        assert_eq!(format_currency(-1234567.5), "-₹12,34,567.5");
    }

    #[test]
    fn tiny_negative_amounts_do_not_render_negative_zero() {
        assert_eq!(format_currency(-0.001), "₹0");
    }

    #[test]
    fn non_finite_amounts_render_as_zero() {
        assert_eq!(format_currency(f64::NAN), "₹0");
        assert_eq!(format_currency(f64::INFINITY), "₹0");
    }

    #[test]
    fn signed_amount_direction_comes_from_kind() {
        assert_eq!(format_signed(2500.0, TransactionKind::Income), "+₹2,500");
        assert_eq!(format_signed(2500.0, TransactionKind::Expense), "-₹2,500");
    }

    #[test]
    fn short_amounts_are_not_grouped() {
        assert_eq!(format_currency(7.0), "₹7");
        assert_eq!(format_currency(12.0), "₹12");
        assert_eq!(format_currency(12345.0), "₹12,345");
    }

    #[test]
    fn single_paisa_keeps_leading_zero() {
        assert_eq!(format_currency(1000.05), "₹1,000.05");
        assert_eq!(format_currency(0.1), "₹0.1");
    }
}
