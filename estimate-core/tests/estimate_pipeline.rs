//! Drives a whole session through the public API the way a hosting surface
//! would: raw strings in, formatted views out.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use estimate_core::formatting::parse_money;
use estimate_core::{
    ActiveView, AreaCoefficients, EstimateSession, LineItemDraft, LineItemField, MaterialCategory,
    PartyField, ScalarField, SurfaceAction,
};

fn type_into(
    session: &mut EstimateSession,
    index: usize,
    field: LineItemField,
    raw: &str,
) {
    session.apply(SurfaceAction::UpdateItem {
        index,
        field,
        raw: raw.to_string(),
    });
}

fn set(
    session: &mut EstimateSession,
    field: ScalarField,
    raw: &str,
) {
    session.apply(SurfaceAction::SetScalar {
        field,
        raw: raw.to_string(),
    });
}

fn cement_session() -> EstimateSession {
    let mut session = EstimateSession::new(AreaCoefficients::default());
    session.apply(SurfaceAction::AddItem(LineItemDraft::default()));
    type_into(&mut session, 0, LineItemField::Name, "Cement");
    type_into(&mut session, 0, LineItemField::Unit, "bag");
    type_into(&mut session, 0, LineItemField::Quantity, "10");
    type_into(&mut session, 0, LineItemField::UnitCost, "350");
    set(&mut session, ScalarField::LaborRate, "500");
    set(&mut session, ScalarField::LaborDays, "4");
    set(&mut session, ScalarField::MarkupPercent, "10");
    set(&mut session, ScalarField::TaxPercent, "5");
    session
}

#[test]
fn test_cement_scenario_breakdown() {
    let breakdown = cement_session().breakdown();

    assert_eq!(breakdown.material_subtotal, dec!(3500));
    assert_eq!(breakdown.labor_cost, dec!(2000));
    assert_eq!(breakdown.base_subtotal, dec!(5500));
    assert_eq!(breakdown.markup, dec!(550));
    assert_eq!(breakdown.subtotal_before_tax, dec!(6050));
    assert_eq!(breakdown.tax, dec!(302.5));
    assert_eq!(breakdown.grand_total, dec!(6352.5));
}

#[test]
fn test_formatted_totals_parse_back_to_breakdown() {
    let session = cement_session();
    let breakdown = session.breakdown();
    let totals = session.render().totals;

    assert_eq!(parse_money(&totals.tax), breakdown.tax);
    assert_eq!(parse_money(&totals.grand_total), breakdown.grand_total);
}

#[test]
fn test_quantity_and_invoice_views_share_totals() {
    let mut session = cement_session();
    session.apply(SurfaceAction::SetParty {
        field: PartyField::ProjectName,
        value: "Lakeview Duplex".to_string(),
    });

    session.apply(SurfaceAction::SyncQuantityView);
    let update = session.apply(SurfaceAction::SyncInvoiceView);

    let quantity = session.quantity_view().expect("quantity view was synced");
    let invoice = session.invoice_view().expect("invoice view was synced");

    assert_eq!(update.active_view, ActiveView::Invoice);
    assert_eq!(quantity.summary, invoice.summary);
    assert_eq!(invoice.summary.grand_total, "₹6352.50");
    assert_eq!(invoice.parties.project_name, "Lakeview Duplex");
    assert_eq!(invoice.parties.client_name, "Client Name");
}

#[test]
fn test_blank_rows_never_reach_projections() {
    let mut session = cement_session();
    session.apply(SurfaceAction::AddItem(LineItemDraft::default()));
    type_into(&mut session, 1, LineItemField::Unit, "kg");
    type_into(&mut session, 1, LineItemField::Quantity, "40");

    session.apply(SurfaceAction::SyncQuantityView);
    session.apply(SurfaceAction::SyncInvoiceView);

    assert_eq!(session.render().rows.len(), 2);
    assert_eq!(session.quantity_view().map(|v| v.rows.len()), Some(1));
    assert_eq!(session.invoice_view().map(|v| v.rows.len()), Some(1));
}

#[test]
fn test_area_heuristics_append_rows_in_order() {
    let mut session = EstimateSession::new(AreaCoefficients::default());
    set(&mut session, ScalarField::ProjectArea, "1000");

    for category in MaterialCategory::all() {
        session.apply(SurfaceAction::ApplyCategory(*category));
    }

    let quantities: Vec<Decimal> = session.ledger().iter().map(|item| item.quantity).collect();
    assert_eq!(
        quantities,
        vec![dec!(4700), dec!(56.0), dec!(1.90), dec!(23.0)]
    );
}

#[test]
fn test_area_heuristics_noop_without_area() {
    let mut session = EstimateSession::new(AreaCoefficients::default());
    set(&mut session, ScalarField::ProjectArea, "");

    for category in MaterialCategory::all() {
        session.apply(SurfaceAction::ApplyCategory(*category));
    }

    assert!(session.ledger().is_empty());
}
