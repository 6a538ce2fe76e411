//! Estimate calculations.
//!
//! [`compute_breakdown`] turns the ledger and the scalar inputs into the cost
//! breakdown; [`area_estimate`] holds the per-category quantity heuristics.

pub mod area_estimate;
pub mod breakdown;
pub mod common;

pub use area_estimate::estimate_quantity;
pub use breakdown::{Breakdown, FormattedBreakdown, compute_breakdown};
