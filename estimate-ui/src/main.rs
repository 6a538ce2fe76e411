use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use estimate_core::{ActiveView, MaterialCategory, PartyField, ScalarField};
use estimate_ui::app::{self, EstimateRequest};
use estimate_ui::config::EstimatorConfig;
use estimate_ui::logging::{self, LogSettings};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Construction material estimator.
///
/// Builds a ledger of materials from a CSV file, inline items, library
/// templates and area heuristics, then prints the estimate, the bill of
/// quantities or the invoice.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML file with area coefficients and the material library.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of line items (`name,unit,quantity,unit_cost`).
    #[arg(long)]
    materials: Option<PathBuf>,

    /// Inline line item, e.g. `"Cement,bag,10,350"`. Repeatable.
    #[arg(long = "item")]
    items: Vec<String>,

    /// Library template to add by name. Repeatable.
    #[arg(long = "template")]
    templates: Vec<String>,

    /// Project area used by `--estimate`.
    #[arg(long)]
    area: Option<String>,

    /// Size a category from the project area: brick, cement, steel, paint.
    /// Repeatable.
    #[arg(long = "estimate")]
    estimates: Vec<MaterialCategory>,

    #[arg(long)]
    labor_rate: Option<String>,

    #[arg(long)]
    labor_days: Option<String>,

    /// Markup percentage applied to materials plus labor.
    #[arg(long)]
    markup: Option<String>,

    /// Tax percentage applied after markup.
    #[arg(long)]
    tax: Option<String>,

    #[arg(long)]
    client_name: Option<String>,

    #[arg(long)]
    client_address: Option<String>,

    #[arg(long)]
    project_name: Option<String>,

    #[arg(long)]
    project_location: Option<String>,

    #[arg(long)]
    invoice_number: Option<String>,

    #[arg(long)]
    invoice_date: Option<String>,

    #[arg(long)]
    due_date: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    terms: Option<String>,

    /// View to print: estimate, quantity or invoice.
    #[arg(long, default_value = "estimate", value_parser = parse_view)]
    view: ActiveView,

    /// Log filter, a bare level or a full RUST_LOG directive.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(long)]
    quiet: bool,
}

fn parse_view(s: &str) -> Result<ActiveView, String> {
    ActiveView::parse(s)
        .ok_or_else(|| format!("unknown view '{s}' (expected estimate, quantity or invoice)"))
}

impl Cli {
    fn into_request(self) -> EstimateRequest {
        let scalars = [
            (ScalarField::ProjectArea, self.area),
            (ScalarField::LaborRate, self.labor_rate),
            (ScalarField::LaborDays, self.labor_days),
            (ScalarField::MarkupPercent, self.markup),
            (ScalarField::TaxPercent, self.tax),
        ];
        let party = [
            (PartyField::ClientName, self.client_name),
            (PartyField::ClientAddress, self.client_address),
            (PartyField::ProjectName, self.project_name),
            (PartyField::ProjectLocation, self.project_location),
            (PartyField::InvoiceNumber, self.invoice_number),
            (PartyField::InvoiceDate, self.invoice_date),
            (PartyField::DueDate, self.due_date),
            (PartyField::Description, self.description),
            (PartyField::Terms, self.terms),
        ];

        EstimateRequest {
            materials: self.materials,
            items: self.items,
            templates: self.templates,
            estimates: self.estimates,
            scalars: scalars
                .into_iter()
                .filter_map(|(field, raw)| raw.map(|r| (field, r)))
                .collect(),
            party: party
                .into_iter()
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .collect(),
            view: self.view,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LogSettings {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
        quiet: cli.quiet,
    })?;

    let config = match &cli.config {
        Some(path) => EstimatorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from: {}", path.display()))?,
        None => EstimatorConfig::default(),
    };
    debug!(templates = config.templates.len(), "configuration ready");

    let output = app::run(&cli.into_request(), &config)?;
    print!("{output}");

    Ok(())
}
