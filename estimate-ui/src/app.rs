//! Drives an [`EstimateSession`] from one command-line invocation.
//!
//! The terminal is the hosting surface: every flag becomes a
//! [`SurfaceAction`], the actions are applied in order, and the view that the
//! final print request names is rendered to text.

use std::{fmt, path::PathBuf};

use anyhow::{Context, Result, bail};
use estimate_core::{
    ActiveView, EstimateSession, MaterialCategory, PartyField, ScalarField, SurfaceAction,
};
use tracing::info;

use crate::config::EstimatorConfig;
use crate::csv_loader;
use crate::render::{EstimateTable, InvoiceDocument, QuantityTable};

/// Everything collected from the command line, still as raw text.
#[derive(Clone, Debug, Default)]
pub struct EstimateRequest {
    /// CSV file of line items.
    pub materials: Option<PathBuf>,
    /// Inline `name,unit,quantity,unit_cost` records.
    pub items: Vec<String>,
    /// Names of library templates to add.
    pub templates: Vec<String>,
    /// Categories to size from the project area.
    pub estimates: Vec<MaterialCategory>,
    pub scalars: Vec<(ScalarField, String)>,
    pub party: Vec<(PartyField, String)>,
    pub view: ActiveView,
}

impl fmt::Display for EstimateRequest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let materials = self
            .materials
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "materials={} items={} templates={} estimates={} view={}",
            materials,
            self.items.len(),
            self.templates.len(),
            self.estimates.len(),
            self.view.as_str()
        )
    }
}

/// Translates a request into the ordered list of surface actions.
///
/// Scalar inputs come first so the area heuristics see the project area.
/// The list always ends with a print request for the chosen view.
pub fn build_actions(
    request: &EstimateRequest,
    config: &EstimatorConfig,
) -> Result<Vec<SurfaceAction>> {
    let mut actions = Vec::new();

    for (field, raw) in &request.scalars {
        actions.push(SurfaceAction::SetScalar {
            field: *field,
            raw: raw.clone(),
        });
    }

    for (field, value) in &request.party {
        actions.push(SurfaceAction::SetParty {
            field: *field,
            value: value.clone(),
        });
    }

    if let Some(path) = &request.materials {
        let drafts = csv_loader::load_from_file(path)
            .with_context(|| format!("Failed to load materials from: {}", path.display()))?;
        actions.extend(drafts.into_iter().map(SurfaceAction::AddItem));
    }

    for item in &request.items {
        let draft = csv_loader::parse_inline_item(item)
            .with_context(|| format!("Invalid item: {item:?}"))?;
        actions.push(SurfaceAction::AddItem(draft));
    }

    for name in &request.templates {
        let Some(template) = config.find_template(name) else {
            bail!("unknown material template '{name}'");
        };
        actions.push(SurfaceAction::AddTemplate(template.clone()));
    }

    actions.extend(
        request
            .estimates
            .iter()
            .map(|category| SurfaceAction::ApplyCategory(*category)),
    );

    match request.view {
        ActiveView::Estimate => {}
        ActiveView::Quantity => actions.push(SurfaceAction::SyncQuantityView),
        ActiveView::Invoice => actions.push(SurfaceAction::SyncInvoiceView),
    }
    actions.push(SurfaceAction::Print);

    Ok(actions)
}

/// Runs the request through a fresh session and returns the printed view.
pub fn run(
    request: &EstimateRequest,
    config: &EstimatorConfig,
) -> Result<String> {
    info!("{}", request);

    let mut session = EstimateSession::new(config.area_coefficients);
    let mut last = None;
    for action in build_actions(request, config)? {
        last = Some(session.apply(action));
    }

    let update = last.context("no actions were applied")?;
    let view = update.print_requested.unwrap_or(update.active_view);

    let text = match view {
        ActiveView::Estimate => EstimateTable(&update.estimate).to_string(),
        ActiveView::Quantity => {
            let quantity = session
                .quantity_view()
                .context("quantity view was never synced")?;
            QuantityTable(quantity).to_string()
        }
        ActiveView::Invoice => {
            let invoice = session
                .invoice_view()
                .context("invoice view was never synced")?;
            InvoiceDocument(invoice).to_string()
        }
    };

    Ok(text)
}
