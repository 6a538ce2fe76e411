use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::coerce_decimal;

/// Project-wide numeric inputs. Every field defaults to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScalarInputs {
    /// Built-up area driving the category heuristics.
    pub project_area: Decimal,
    /// Labor cost per day.
    pub labor_rate: Decimal,
    pub labor_days: Decimal,
    pub markup_percent: Decimal,
    pub tax_percent: Decimal,
}

/// Identifies one of the [`ScalarInputs`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarField {
    ProjectArea,
    LaborRate,
    LaborDays,
    MarkupPercent,
    TaxPercent,
}

impl ScalarInputs {
    /// Stores the coerced value of `raw` into `field`.
    pub fn set(
        &mut self,
        field: ScalarField,
        raw: &str,
    ) {
        let value = coerce_decimal(raw);
        match field {
            ScalarField::ProjectArea => self.project_area = value,
            ScalarField::LaborRate => self.labor_rate = value,
            ScalarField::LaborDays => self.labor_days = value,
            ScalarField::MarkupPercent => self.markup_percent = value,
            ScalarField::TaxPercent => self.tax_percent = value,
        }
    }

    pub fn get(
        &self,
        field: ScalarField,
    ) -> Decimal {
        match field {
            ScalarField::ProjectArea => self.project_area,
            ScalarField::LaborRate => self.labor_rate,
            ScalarField::LaborDays => self.labor_days,
            ScalarField::MarkupPercent => self.markup_percent,
            ScalarField::TaxPercent => self.tax_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn set_coerces_raw_text() {
        let mut scalars = ScalarInputs::default();

        scalars.set(ScalarField::LaborRate, "1,500");
        scalars.set(ScalarField::TaxPercent, "five");

        assert_eq!(scalars.get(ScalarField::LaborRate), dec!(1500));
        assert_eq!(scalars.get(ScalarField::TaxPercent), Decimal::ZERO);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut scalars = ScalarInputs::default();

        scalars.set(ScalarField::MarkupPercent, "10");
        scalars.set(ScalarField::MarkupPercent, "");

        assert_eq!(scalars.markup_percent, Decimal::ZERO);
    }
}
