//! Rough material quantities derived from the project area.
//!
//! Each [`MaterialCategory`] has a linear coefficient and a rounding
//! precision (see [`AreaCoefficients`]). The quantity is
//! `round(project_area * factor, decimals)`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use estimate_core::calculations::estimate_quantity;
//! use estimate_core::{AreaCoefficients, MaterialCategory};
//!
//! let coefficients = AreaCoefficients::default();
//! let quantity = estimate_quantity(MaterialCategory::Cement, dec!(1000), &coefficients);
//!
//! assert_eq!(quantity, Some(dec!(56.0)));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{product, round_to};
use crate::{AreaCoefficients, MaterialCategory};

/// Returns the heuristic quantity for `category`, or `None` when the project
/// area is zero or negative.
pub fn estimate_quantity(
    category: MaterialCategory,
    project_area: Decimal,
    coefficients: &AreaCoefficients,
) -> Option<Decimal> {
    if project_area <= Decimal::ZERO {
        return None;
    }

    let coefficient = coefficients.for_category(category);
    let raw = product(project_area, coefficient.factor);

    Some(round_to(raw, coefficient.decimals))
}
