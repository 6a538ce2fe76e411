//! A single estimating session and its update pipeline.
//!
//! [`EstimateSession`] owns everything the user has entered. The hosting
//! surface turns each user event into a [`SurfaceAction`] and hands it to
//! [`EstimateSession::apply`], which mutates, recomputes the breakdown and
//! returns a fresh render of the editable ledger. The breakdown itself is
//! never stored.
//!
//! The quantity and invoice views are only re-projected by their sync
//! actions; between syncs they keep showing what they showed last.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculations::{Breakdown, FormattedBreakdown, compute_breakdown};
use crate::formatting::{format_money, format_plain_or_blank, format_quantity};
use crate::projection::{InvoiceView, QuantityView, project_to_invoice_view, project_to_quantity_view};
use crate::{
    ActiveView, AreaCoefficients, Ledger, LineItemDraft, LineItemField, MaterialCategory,
    MaterialTemplate, PartyField, PartyInfo, ScalarField, ScalarInputs,
};

/// A discrete event coming from the hosting surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceAction {
    AddItem(LineItemDraft),
    RemoveItem(usize),
    UpdateItem {
        index: usize,
        field: LineItemField,
        raw: String,
    },
    SetScalar {
        field: ScalarField,
        raw: String,
    },
    SetParty {
        field: PartyField,
        value: String,
    },
    /// Size a new row for the category from the current project area.
    ApplyCategory(MaterialCategory),
    AddTemplate(MaterialTemplate),
    SyncQuantityView,
    SyncInvoiceView,
    /// Ask the host to print the active view.
    Print,
}

/// One editable ledger row as shown next to its live line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRowRender {
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub unit_cost: String,
    pub line_total: String,
}

/// Everything the estimate view shows after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRender {
    pub rows: Vec<LedgerRowRender>,
    pub totals: FormattedBreakdown,
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceUpdate {
    pub estimate: EstimateRender,
    pub active_view: ActiveView,
    /// Set when the host should hand this view to its print facility.
    pub print_requested: Option<ActiveView>,
}

#[derive(Debug, Clone, Default)]
pub struct EstimateSession {
    ledger: Ledger,
    scalars: ScalarInputs,
    party: PartyInfo,
    coefficients: AreaCoefficients,
    quantity_view: Option<QuantityView>,
    invoice_view: Option<InvoiceView>,
    active_view: ActiveView,
}

impl EstimateSession {
    pub fn new(coefficients: AreaCoefficients) -> Self {
        Self {
            coefficients,
            ..Default::default()
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn scalars(&self) -> &ScalarInputs {
        &self.scalars
    }

    pub fn party(&self) -> &PartyInfo {
        &self.party
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    /// Last synced bill of quantities, if any. May be stale.
    pub fn quantity_view(&self) -> Option<&QuantityView> {
        self.quantity_view.as_ref()
    }

    /// Last synced invoice, if any. May be stale.
    pub fn invoice_view(&self) -> Option<&InvoiceView> {
        self.invoice_view.as_ref()
    }

    /// Recomputes the breakdown from the current inputs.
    pub fn breakdown(&self) -> Breakdown {
        compute_breakdown(&self.ledger, &self.scalars)
    }

    /// Renders the editable ledger with live line totals and formatted totals.
    pub fn render(&self) -> EstimateRender {
        let rows = self
            .ledger
            .iter()
            .map(|item| LedgerRowRender {
                name: item.name.clone(),
                unit: item.unit.clone(),
                quantity: format_quantity(item.quantity),
                unit_cost: format_plain_or_blank(item.unit_cost),
                line_total: format_money(item.line_total()),
            })
            .collect();

        EstimateRender {
            rows,
            totals: self.breakdown().formatted(),
        }
    }

    /// Applies one action, then recomputes and renders.
    pub fn apply(
        &mut self,
        action: SurfaceAction,
    ) -> SurfaceUpdate {
        debug!(?action, "applying surface action");
        let mut print_requested = None;

        match action {
            SurfaceAction::AddItem(draft) => {
                self.ledger.add_item(draft);
            }
            SurfaceAction::RemoveItem(index) => {
                self.ledger.remove_item(index);
            }
            SurfaceAction::UpdateItem { index, field, raw } => {
                self.ledger.update_field(index, field, &raw);
            }
            SurfaceAction::SetScalar { field, raw } => {
                self.scalars.set(field, &raw);
            }
            SurfaceAction::SetParty { field, value } => {
                self.party.set(field, value);
            }
            SurfaceAction::ApplyCategory(category) => {
                self.ledger.estimate_from_area(
                    category,
                    self.scalars.project_area,
                    &self.coefficients,
                );
            }
            SurfaceAction::AddTemplate(template) => {
                self.ledger.add_template(&template);
                self.active_view = ActiveView::Estimate;
            }
            SurfaceAction::SyncQuantityView => {
                let view = project_to_quantity_view(&self.ledger, &self.breakdown());
                info!(rows = view.rows.len(), "synced quantity view");
                self.quantity_view = Some(view);
                self.active_view = ActiveView::Quantity;
            }
            SurfaceAction::SyncInvoiceView => {
                let view = project_to_invoice_view(&self.ledger, &self.breakdown(), &self.party);
                info!(rows = view.rows.len(), "synced invoice view");
                self.active_view = view.navigate_to;
                self.invoice_view = Some(view);
            }
            SurfaceAction::Print => {
                print_requested = Some(self.active_view);
            }
        }

        SurfaceUpdate {
            estimate: self.render(),
            active_view: self.active_view,
            print_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn set_scalar(
        field: ScalarField,
        raw: &str,
    ) -> SurfaceAction {
        SurfaceAction::SetScalar {
            field,
            raw: raw.to_string(),
        }
    }

    fn edit(
        index: usize,
        field: LineItemField,
        raw: &str,
    ) -> SurfaceAction {
        SurfaceAction::UpdateItem {
            index,
            field,
            raw: raw.to_string(),
        }
    }

    #[test]
    fn every_edit_recomputes_totals() {
        let mut session = EstimateSession::default();

        session.apply(SurfaceAction::AddItem(LineItemDraft::default()));
        session.apply(edit(0, LineItemField::Name, "Cement"));
        session.apply(edit(0, LineItemField::Quantity, "10"));
        let update = session.apply(edit(0, LineItemField::UnitCost, "350"));

        assert_eq!(update.estimate.rows[0].line_total, "₹3500.00");
        assert_eq!(update.estimate.totals.material_subtotal, "₹3500.00");
        assert_eq!(update.estimate.totals.grand_total, "₹3500.00");
    }

    #[test]
    fn scalar_changes_flow_into_totals() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::AddItem(LineItemDraft {
            name: Some("Cement".to_string()),
            unit: Some("bag".to_string()),
            quantity: Some(dec!(10)),
            unit_cost: Some(dec!(350)),
        }));

        session.apply(set_scalar(ScalarField::LaborRate, "500"));
        session.apply(set_scalar(ScalarField::LaborDays, "4"));
        session.apply(set_scalar(ScalarField::MarkupPercent, "10"));
        let update = session.apply(set_scalar(ScalarField::TaxPercent, "5"));

        assert_eq!(update.estimate.totals.subtotal_before_tax, "₹6050.00");
        assert_eq!(update.estimate.totals.grand_total, "₹6352.50");
    }

    #[test]
    fn remove_out_of_range_leaves_session_unchanged() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::AddItem(LineItemDraft::default()));
        let before = session.render();

        let update = session.apply(SurfaceAction::RemoveItem(5));

        assert_eq!(update.estimate, before);
    }

    #[test]
    fn category_uses_current_project_area() {
        let mut session = EstimateSession::new(AreaCoefficients::default());

        session.apply(SurfaceAction::ApplyCategory(MaterialCategory::Cement));
        assert!(session.ledger().is_empty());

        session.apply(set_scalar(ScalarField::ProjectArea, "1,000"));
        let update = session.apply(SurfaceAction::ApplyCategory(MaterialCategory::Cement));

        assert_eq!(update.estimate.rows.len(), 1);
        assert_eq!(update.estimate.rows[0].name, "Cement Bags (approx.)");
        assert_eq!(update.estimate.rows[0].quantity, "56");
        assert_eq!(update.estimate.rows[0].unit_cost, "");
    }

    #[test]
    fn projected_views_go_stale_until_resynced() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::AddItem(LineItemDraft {
            name: Some("Sand".to_string()),
            ..Default::default()
        }));
        session.apply(SurfaceAction::SyncQuantityView);

        session.apply(SurfaceAction::AddItem(LineItemDraft {
            name: Some("Gravel".to_string()),
            ..Default::default()
        }));
        let stale_rows = session.quantity_view().map(|view| view.rows.len());

        session.apply(SurfaceAction::SyncQuantityView);
        let fresh_rows = session.quantity_view().map(|view| view.rows.len());

        assert_eq!(stale_rows, Some(1));
        assert_eq!(fresh_rows, Some(2));
    }

    #[test]
    fn sync_invoice_switches_to_invoice_view() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::SetParty {
            field: PartyField::ClientName,
            value: "Asha Builders".to_string(),
        });

        let update = session.apply(SurfaceAction::SyncInvoiceView);

        assert_eq!(update.active_view, ActiveView::Invoice);
        assert_eq!(
            session.invoice_view().map(|view| view.parties.client_name.as_str()),
            Some("Asha Builders")
        );
    }

    #[test]
    fn template_switches_back_to_estimate_view() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::SyncQuantityView);

        let update = session.apply(SurfaceAction::AddTemplate(MaterialTemplate::new(
            "River Sand",
            "cu ft",
        )));

        assert_eq!(update.active_view, ActiveView::Estimate);
        assert_eq!(update.estimate.rows[0].unit, "cu ft");
    }

    #[test]
    fn print_reports_active_view() {
        let mut session = EstimateSession::default();
        session.apply(SurfaceAction::SyncInvoiceView);

        let update = session.apply(SurfaceAction::Print);

        assert_eq!(update.print_requested, Some(ActiveView::Invoice));
    }

    #[test]
    fn other_actions_do_not_request_print() {
        let mut session = EstimateSession::default();

        let update = session.apply(SurfaceAction::AddItem(LineItemDraft::default()));

        assert_eq!(update.print_requested, None);
    }
}
