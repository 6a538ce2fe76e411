//! End-to-end runs of the estimator pipeline against on-disk fixtures.

use std::path::{Path, PathBuf};

use estimate_core::{ActiveView, MaterialCategory, PartyField, ScalarField};
use estimate_ui::app::{self, EstimateRequest};
use estimate_ui::config::EstimatorConfig;

fn manifest_path(parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf(), |p, part| {
            p.join(part)
        })
}

fn fixture_request(view: ActiveView) -> EstimateRequest {
    EstimateRequest {
        materials: Some(manifest_path(&["tests", "fixtures", "sample_materials.csv"])),
        scalars: vec![
            (ScalarField::LaborRate, "800".to_string()),
            (ScalarField::LaborDays, "5".to_string()),
            (ScalarField::MarkupPercent, "10".to_string()),
            (ScalarField::TaxPercent, "18".to_string()),
        ],
        view,
        ..Default::default()
    }
}

#[test]
fn test_shipped_config_matches_defaults() {
    let config =
        EstimatorConfig::load_from_file(&manifest_path(&["config", "estimator.toml"])).unwrap();

    assert_eq!(config, EstimatorConfig::default());
}

#[test]
fn test_estimate_view_totals() {
    // materials 3500 + 51000 = 54500, labor 4000
    // markup 5850, before tax 64350, tax 11583, grand 75933
    let text = app::run(
        &fixture_request(ActiveView::Estimate),
        &EstimatorConfig::default(),
    )
    .unwrap();

    assert!(text.contains("Material subtotal:    ₹54500.00"));
    assert!(text.contains("Labor:                ₹4000.00"));
    assert!(text.contains("Markup:               ₹5850.00"));
    assert!(text.contains("Subtotal before tax:  ₹64350.00"));
    assert!(text.contains("Tax:                  ₹11583.00"));
    assert!(text.contains("Grand total:          ₹75933.00"));
}

#[test]
fn test_quantity_view_skips_blank_row() {
    let text = app::run(
        &fixture_request(ActiveView::Quantity),
        &EstimatorConfig::default(),
    )
    .unwrap();

    // title, header, rule, three rows
    let table: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
    assert_eq!(table.len(), 6);
    assert!(table[5].starts_with("Binding Wire"));
    assert!(text.contains("Grand total:        ₹75933.00"));
}

#[test]
fn test_invoice_view_with_parties_and_area_estimate() {
    let mut request = fixture_request(ActiveView::Invoice);
    request.scalars.push((ScalarField::ProjectArea, "1000".to_string()));
    request.estimates.push(MaterialCategory::Paint);
    request
        .party
        .push((PartyField::ProjectName, "Lakeview Villa".to_string()));
    request
        .party
        .push((PartyField::InvoiceNumber, "INV-0042".to_string()));

    let text = app::run(&request, &EstimatorConfig::default()).unwrap();

    assert!(text.contains("Invoice no.:  INV-0042"));
    assert!(text.contains("Bill to:      Client Name"));
    assert!(text.contains("Project:      Lakeview Villa"));
    assert!(text.contains("Paint (approx.)"));
}
