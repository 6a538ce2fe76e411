//! Cost breakdown for a construction estimate.
//!
//! # Breakdown Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Material subtotal: sum of every line total |
//! | 2    | Labor cost: labor rate × labor days |
//! | 3    | Base subtotal: Step 1 + Step 2 |
//! | 4    | Markup: Step 3 × markup % |
//! | 5    | Subtotal before tax: Step 3 + Step 4 |
//! | 6    | Tax: Step 5 × tax % |
//! | 7    | Grand total: Step 5 + Step 6 |
//!
//! No step rounds its result. Rounding to two places only happens when a
//! value is formatted for display. An overflowing step contributes zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::{Ledger, LineItemDraft, ScalarInputs, compute_breakdown};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_item(LineItemDraft {
//!     name: Some("Cement".to_string()),
//!     unit: Some("bag".to_string()),
//!     quantity: Some(dec!(10)),
//!     unit_cost: Some(dec!(350)),
//! });
//!
//! let scalars = ScalarInputs {
//!     labor_rate: dec!(500),
//!     labor_days: dec!(4),
//!     markup_percent: dec!(10),
//!     tax_percent: dec!(5),
//!     ..Default::default()
//! };
//!
//! let breakdown = compute_breakdown(&ledger, &scalars);
//!
//! assert_eq!(breakdown.subtotal_before_tax, dec!(6050));
//! assert_eq!(breakdown.grand_total, dec!(6352.5));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{or_zero, percent_of, product, sum};
use crate::formatting::format_money;
use crate::{Ledger, ScalarInputs};

/// Every total derived from the ledger and the scalar inputs.
///
/// Always produced by [`compute_breakdown`]; no field is edited on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub material_subtotal: Decimal,
    pub labor_cost: Decimal,
    /// Materials plus labor, before markup.
    pub base_subtotal: Decimal,
    pub markup: Decimal,
    pub subtotal_before_tax: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
}

/// The six display totals of a [`Breakdown`], already formatted as money.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedBreakdown {
    pub material_subtotal: String,
    pub labor_cost: String,
    pub markup: String,
    pub subtotal_before_tax: String,
    pub tax: String,
    pub grand_total: String,
}

impl Breakdown {
    pub fn formatted(&self) -> FormattedBreakdown {
        FormattedBreakdown {
            material_subtotal: format_money(self.material_subtotal),
            labor_cost: format_money(self.labor_cost),
            markup: format_money(self.markup),
            subtotal_before_tax: format_money(self.subtotal_before_tax),
            tax: format_money(self.tax),
            grand_total: format_money(self.grand_total),
        }
    }
}

/// Computes the full breakdown. Pure: identical inputs give identical output.
pub fn compute_breakdown(
    ledger: &Ledger,
    scalars: &ScalarInputs,
) -> Breakdown {
    let material_subtotal = material_subtotal(ledger);
    let labor_cost = labor_cost(scalars.labor_rate, scalars.labor_days);
    let base_subtotal = sum(material_subtotal, labor_cost);
    let markup = percent_of(base_subtotal, scalars.markup_percent);
    let subtotal_before_tax = sum(base_subtotal, markup);
    let tax = percent_of(subtotal_before_tax, scalars.tax_percent);
    let grand_total = sum(subtotal_before_tax, tax);

    Breakdown {
        material_subtotal,
        labor_cost,
        base_subtotal,
        markup,
        subtotal_before_tax,
        tax,
        grand_total,
    }
}

/// Sums the line totals. A line whose own total overflowed already reads as
/// zero; once the running sum overflows, the whole subtotal is zero.
fn material_subtotal(ledger: &Ledger) -> Decimal {
    or_zero(
        ledger
            .iter()
            .map(|item| item.line_total())
            .try_fold(Decimal::ZERO, |acc, total| acc.checked_add(total)),
    )
}

fn labor_cost(
    rate: Decimal,
    days: Decimal,
) -> Decimal {
    product(rate, days)
}
