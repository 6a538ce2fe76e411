//! Display formatting for money and quantities.
//!
//! Formatting is one-way: nothing here feeds back into computation. When a
//! formatted money string has to be read again, [`parse_money`] strips the
//! currency symbol and separators and goes through the normal coercion path.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{coerce_decimal, round_half_up};

/// The fixed currency symbol prefixed to every money value.
pub const CURRENCY_SYMBOL: &str = "₹";

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("static pattern is valid"));

/// Rounds to two places and pins the scale so `302.5` prints as `302.50`.
///
/// A value too large to carry two fractional digits is not representable
/// and reads as `0.00`.
fn two_places(value: Decimal) -> Decimal {
    let mut rounded = round_half_up(value);
    if rounded.is_zero() {
        // drop the sign of -0.00
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    if rounded.scale() != 2 {
        debug!(%value, "value too large to format, showing zero");
        return Decimal::new(0, 2);
    }
    rounded
}

/// Renders `value` as currency, e.g. `₹6352.50`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::formatting::format_money;
///
/// assert_eq!(format_money(dec!(6352.5)), "₹6352.50");
/// assert_eq!(format_money(dec!(0)), "₹0.00");
/// ```
pub fn format_money(value: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{}", two_places(value))
}

/// Renders `value` to two places without the currency symbol.
pub fn format_plain(value: Decimal) -> String {
    two_places(value).to_string()
}

/// Renders a money value for a cell that stays blank when the value is zero.
pub fn format_money_or_blank(value: Decimal) -> String {
    if value.is_zero() {
        String::new()
    } else {
        format_money(value)
    }
}

/// Renders a plain number for a cell that stays blank when the value is zero.
pub fn format_plain_or_blank(value: Decimal) -> String {
    if value.is_zero() {
        String::new()
    } else {
        format_plain(value)
    }
}

/// Renders a quantity without trailing zeros; blank when zero.
pub fn format_quantity(value: Decimal) -> String {
    if value.is_zero() {
        String::new()
    } else {
        value.normalize().to_string()
    }
}

/// Reads a formatted money string back into a number.
///
/// Everything except digits, `.` and `-` is discarded before coercion, so the
/// currency symbol and grouping separators are ignored.
pub fn parse_money(formatted: &str) -> Decimal {
    coerce_decimal(&NON_NUMERIC.replace_all(formatted, ""))
}
