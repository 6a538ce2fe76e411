pub mod calculations;
pub mod formatting;
pub mod ledger;
pub mod models;
pub mod projection;
pub mod session;

pub use calculations::{Breakdown, FormattedBreakdown, compute_breakdown};
pub use ledger::Ledger;
pub use models::*;
pub use projection::{
    InvoiceParties, InvoiceRow, InvoiceView, QuantityRow, QuantityView, ViewSummary,
    project_to_invoice_view, project_to_quantity_view,
};
pub use session::{EstimateRender, EstimateSession, LedgerRowRender, SurfaceAction, SurfaceUpdate};
