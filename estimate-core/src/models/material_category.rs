use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Materials that can be roughly sized from the project area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Brick,
    Cement,
    Steel,
    Paint,
}

impl MaterialCategory {
    pub fn all() -> &'static [MaterialCategory] {
        &[Self::Brick, Self::Cement, Self::Steel, Self::Paint]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Cement => "cement",
            Self::Steel => "steel",
            Self::Paint => "paint",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brick" => Some(Self::Brick),
            "cement" => Some(Self::Cement),
            "steel" => Some(Self::Steel),
            "paint" => Some(Self::Paint),
            _ => None,
        }
    }

    /// Name given to the line item the heuristic appends.
    pub fn item_name(&self) -> &'static str {
        match self {
            Self::Brick => "Bricks / Blocks (approx.)",
            Self::Cement => "Cement Bags (approx.)",
            Self::Steel => "Reinforcement Steel (approx.)",
            Self::Paint => "Paint (approx.)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Brick => "pcs",
            Self::Cement => "bag",
            Self::Steel => "ton",
            Self::Paint => "L",
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`MaterialCategory`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown material category '{0}' (expected brick, cement, steel or paint)")]
pub struct ParseCategoryError(pub String);

impl FromStr for MaterialCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Linear rule of thumb: quantity per unit of project area, rounded to
/// `decimals` places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCoefficient {
    pub factor: Decimal,
    pub decimals: u32,
}

impl AreaCoefficient {
    pub const fn new(
        factor: Decimal,
        decimals: u32,
    ) -> Self {
        Self { factor, decimals }
    }
}

/// Per-category area coefficients.
///
/// The defaults are illustrative rules of thumb, not engineering values.
/// When deserialized, any category or field left out keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AreaCoefficientsPatch")]
pub struct AreaCoefficients {
    pub brick: AreaCoefficient,
    pub cement: AreaCoefficient,
    pub steel: AreaCoefficient,
    pub paint: AreaCoefficient,
}

impl AreaCoefficients {
    pub const DEFAULT_BRICK: AreaCoefficient =
        AreaCoefficient::new(Decimal::from_parts(47, 0, 0, false, 1), 0);
    pub const DEFAULT_CEMENT: AreaCoefficient =
        AreaCoefficient::new(Decimal::from_parts(56, 0, 0, false, 3), 1);
    pub const DEFAULT_STEEL: AreaCoefficient =
        AreaCoefficient::new(Decimal::from_parts(19, 0, 0, false, 4), 2);
    pub const DEFAULT_PAINT: AreaCoefficient =
        AreaCoefficient::new(Decimal::from_parts(23, 0, 0, false, 3), 1);

    pub fn for_category(
        &self,
        category: MaterialCategory,
    ) -> AreaCoefficient {
        match category {
            MaterialCategory::Brick => self.brick,
            MaterialCategory::Cement => self.cement,
            MaterialCategory::Steel => self.steel,
            MaterialCategory::Paint => self.paint,
        }
    }
}

impl Default for AreaCoefficients {
    fn default() -> Self {
        Self {
            brick: Self::DEFAULT_BRICK,
            cement: Self::DEFAULT_CEMENT,
            steel: Self::DEFAULT_STEEL,
            paint: Self::DEFAULT_PAINT,
        }
    }
}

/// Partially specified coefficient, as read from configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AreaCoefficientPatch {
    factor: Option<Decimal>,
    decimals: Option<u32>,
}

impl AreaCoefficientPatch {
    fn over(
        self,
        base: AreaCoefficient,
    ) -> AreaCoefficient {
        AreaCoefficient {
            factor: self.factor.unwrap_or(base.factor),
            decimals: self.decimals.unwrap_or(base.decimals),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AreaCoefficientsPatch {
    brick: AreaCoefficientPatch,
    cement: AreaCoefficientPatch,
    steel: AreaCoefficientPatch,
    paint: AreaCoefficientPatch,
}

impl From<AreaCoefficientsPatch> for AreaCoefficients {
    fn from(patch: AreaCoefficientsPatch) -> Self {
        Self {
            brick: patch.brick.over(Self::DEFAULT_BRICK),
            cement: patch.cement.over(Self::DEFAULT_CEMENT),
            steel: patch.steel.over(Self::DEFAULT_STEEL),
            paint: patch.paint.over(Self::DEFAULT_PAINT),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(MaterialCategory::parse("Cement"), Some(MaterialCategory::Cement));
        assert_eq!(MaterialCategory::parse(" PAINT "), Some(MaterialCategory::Paint));
        assert_eq!(MaterialCategory::parse("timber"), None);
    }

    #[test]
    fn from_str_reports_unknown_name() {
        let err = "timber".parse::<MaterialCategory>().unwrap_err();

        assert_eq!(err, ParseCategoryError("timber".to_string()));
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for category in MaterialCategory::all() {
            assert_eq!(MaterialCategory::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn default_coefficients() {
        let coefficients = AreaCoefficients::default();

        assert_eq!(coefficients.brick, AreaCoefficient::new(dec!(4.7), 0));
        assert_eq!(coefficients.cement, AreaCoefficient::new(dec!(0.056), 1));
        assert_eq!(coefficients.steel, AreaCoefficient::new(dec!(0.0019), 2));
        assert_eq!(coefficients.paint, AreaCoefficient::new(dec!(0.023), 1));
    }

    #[test]
    fn empty_patch_gives_defaults() {
        assert_eq!(
            AreaCoefficients::from(AreaCoefficientsPatch::default()),
            AreaCoefficients::default()
        );
    }

    #[test]
    fn partial_patch_keeps_default_decimals() {
        let patch = AreaCoefficientsPatch {
            paint: AreaCoefficientPatch {
                factor: Some(dec!(0.03)),
                decimals: None,
            },
            ..Default::default()
        };

        let coefficients = AreaCoefficients::from(patch);

        assert_eq!(coefficients.paint, AreaCoefficient::new(dec!(0.03), 1));
        assert_eq!(coefficients.steel, AreaCoefficients::DEFAULT_STEEL);
    }
}
