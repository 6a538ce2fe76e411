//! Common arithmetic helpers shared by the calculator, the ledger and the
//! formatters.
//!
//! All money and quantity values are [`Decimal`]. Decimal has no NaN or
//! infinity; the equivalent failure is an operation that overflows, and every
//! helper here maps such an operation to zero so that a bad line can never
//! poison a total.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(302.504)), dec!(302.50));
/// assert_eq!(round_half_up(dec!(302.505)), dec!(302.51));
/// assert_eq!(round_half_up(dec!(-302.505)), dec!(-302.51)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_to(value, 2)
}

/// Rounds `value` to `decimals` places, midpoints away from zero.
pub fn round_to(
    value: Decimal,
    decimals: u32,
) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Collapses the result of a checked operation, treating overflow as zero.
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// `a * b`, or zero on overflow.
pub fn product(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    or_zero(a.checked_mul(b))
}

/// `a + b`, or zero on overflow.
pub fn sum(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    or_zero(a.checked_add(b))
}

/// `base * percent / 100`, or zero on overflow.
pub fn percent_of(
    base: Decimal,
    percent: Decimal,
) -> Decimal {
    or_zero(
        base.checked_mul(percent)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED)),
    )
}

/// Normalizes raw input for decimal parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Best-effort conversion of raw form text into a number.
///
/// Grouping commas are stripped and plain or scientific notation is
/// accepted. The whole string must be a number: trailing text such as
/// `12 bags` and digit separators other than commas (`1_000`) make the input
/// unparseable. Unparseable or empty input becomes zero. This never fails.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::coerce_decimal;
///
/// assert_eq!(coerce_decimal("1,234.50"), dec!(1234.5));
/// assert_eq!(coerce_decimal(""), Decimal::ZERO);
/// assert_eq!(coerce_decimal("abc"), Decimal::ZERO);
/// ```
pub fn coerce_decimal(raw: &str) -> Decimal {
    let normalized = normalize_decimal_input(raw);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    // rust_decimal reads `_` as a digit separator
    if normalized.contains('_') {
        debug!(input = %raw, "coercing number with underscores to zero");
        return Decimal::ZERO;
    }

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            debug!(input = %raw, "coercing unparseable number to zero: {}", e);
            Decimal::ZERO
        })
}
