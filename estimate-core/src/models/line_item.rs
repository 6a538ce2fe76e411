use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::product;

/// One material row of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
}

impl LineItem {
    /// `quantity * unit_cost`, zero if the product overflows.
    pub fn line_total(&self) -> Decimal {
        product(self.quantity, self.unit_cost)
    }

    /// Whether projections leave this row out: no name and nothing to bill.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.line_total().is_zero()
    }
}

/// Initial values for a new line item; anything left `None` defaults to
/// empty text or zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItemDraft {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_cost: Option<Decimal>,
}

impl From<LineItemDraft> for LineItem {
    fn from(draft: LineItemDraft) -> Self {
        Self {
            name: draft.name.map(|s| s.trim().to_string()).unwrap_or_default(),
            unit: draft.unit.map(|s| s.trim().to_string()).unwrap_or_default(),
            quantity: draft.quantity.unwrap_or(Decimal::ZERO),
            unit_cost: draft.unit_cost.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Editable columns of a ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItemField {
    Name,
    Unit,
    Quantity,
    UnitCost,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn line_total_multiplies_quantity_by_unit_cost() {
        let item = LineItem {
            name: "Cement".to_string(),
            unit: "bag".to_string(),
            quantity: dec!(10),
            unit_cost: dec!(350),
        };

        assert_eq!(item.line_total(), dec!(3500));
    }

    #[test]
    fn line_total_overflow_is_zero() {
        let item = LineItem {
            quantity: Decimal::MAX,
            unit_cost: dec!(10),
            ..Default::default()
        };

        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn blank_requires_empty_name_and_zero_total() {
        let unnamed_with_quantity = LineItem {
            unit: "bag".to_string(),
            quantity: dec!(5),
            ..Default::default()
        };
        let unnamed_with_total = LineItem {
            quantity: dec!(5),
            unit_cost: dec!(2),
            ..Default::default()
        };
        let named = LineItem {
            name: "Sand".to_string(),
            ..Default::default()
        };

        assert!(unnamed_with_quantity.is_blank());
        assert!(!unnamed_with_total.is_blank());
        assert!(!named.is_blank());
    }

    #[test]
    fn draft_defaults_missing_fields() {
        let item = LineItem::from(LineItemDraft {
            name: Some("  Gravel ".to_string()),
            ..Default::default()
        });

        assert_eq!(item.name, "Gravel");
        assert_eq!(item.unit, "");
        assert_eq!(item.quantity, Decimal::ZERO);
        assert_eq!(item.unit_cost, Decimal::ZERO);
    }
}
