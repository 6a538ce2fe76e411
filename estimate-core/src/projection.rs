//! Read-only projections of the ledger into the quantity and invoice views.
//!
//! Projections copy data out of the ledger and the breakdown. They never hold
//! references to ledger rows and never write back, so a stored projection
//! goes stale when the ledger changes until it is projected again.
//!
//! Both projections skip rows that have no name and a zero line total.

use serde::{Deserialize, Serialize};

use crate::calculations::{Breakdown, FormattedBreakdown};
use crate::formatting::{format_money, format_money_or_blank, format_plain_or_blank, format_quantity};
use crate::{ActiveView, Ledger, LineItem, PartyInfo};

/// Shown in place of a missing item name.
pub const NAME_PLACEHOLDER: &str = "-";
pub const CLIENT_NAME_PLACEHOLDER: &str = "Client Name";
pub const CLIENT_ADDRESS_PLACEHOLDER: &str = "Client address";
pub const PROJECT_NAME_PLACEHOLDER: &str = "Project Name";
pub const PROJECT_LOCATION_PLACEHOLDER: &str = "Project location";

/// Totals copied into the footer of a projected view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSummary {
    pub material_subtotal: String,
    pub labor_cost: String,
    pub markup: String,
    pub tax: String,
    pub grand_total: String,
}

impl From<&FormattedBreakdown> for ViewSummary {
    fn from(totals: &FormattedBreakdown) -> Self {
        Self {
            material_subtotal: totals.material_subtotal.clone(),
            labor_cost: totals.labor_cost.clone(),
            markup: totals.markup.clone(),
            tax: totals.tax.clone(),
            grand_total: totals.grand_total.clone(),
        }
    }
}

/// One bill-of-quantities row. Unit cost is a plain number, blank when zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRow {
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub unit_cost: String,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantityView {
    pub rows: Vec<QuantityRow>,
    pub summary: ViewSummary,
}

/// One invoice row. Unit cost is money-formatted, blank when zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub description: String,
    pub unit: String,
    pub quantity: String,
    pub unit_cost: String,
    pub line_total: String,
}

/// Party block of the invoice with placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceParties {
    pub client_name: String,
    pub client_address: String,
    pub project_name: String,
    pub project_location: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub description: String,
    pub terms: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub parties: InvoiceParties,
    pub rows: Vec<InvoiceRow>,
    pub summary: ViewSummary,
    /// Syncing the invoice also asks the host to show it.
    pub navigate_to: ActiveView,
}

fn billable(ledger: &Ledger) -> impl Iterator<Item = &LineItem> {
    ledger.iter().filter(|item| !item.is_blank())
}

fn display_name(item: &LineItem) -> String {
    if item.name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        item.name.clone()
    }
}

fn or_placeholder(
    value: &str,
    placeholder: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Projects the ledger into the bill-of-quantities view.
pub fn project_to_quantity_view(
    ledger: &Ledger,
    breakdown: &Breakdown,
) -> QuantityView {
    let rows = billable(ledger)
        .map(|item| QuantityRow {
            name: display_name(item),
            unit: item.unit.clone(),
            quantity: format_quantity(item.quantity),
            unit_cost: format_plain_or_blank(item.unit_cost),
            line_total: format_money(item.line_total()),
        })
        .collect();

    QuantityView {
        rows,
        summary: ViewSummary::from(&breakdown.formatted()),
    }
}

/// Projects the ledger, totals and party details into the invoice view.
pub fn project_to_invoice_view(
    ledger: &Ledger,
    breakdown: &Breakdown,
    party: &PartyInfo,
) -> InvoiceView {
    let parties = InvoiceParties {
        client_name: or_placeholder(&party.client_name, CLIENT_NAME_PLACEHOLDER),
        client_address: or_placeholder(&party.client_address, CLIENT_ADDRESS_PLACEHOLDER),
        project_name: or_placeholder(&party.project_name, PROJECT_NAME_PLACEHOLDER),
        project_location: or_placeholder(&party.project_location, PROJECT_LOCATION_PLACEHOLDER),
        invoice_number: party.invoice_number.trim().to_string(),
        invoice_date: party.invoice_date.trim().to_string(),
        due_date: party.due_date.trim().to_string(),
        description: party.description.trim().to_string(),
        terms: party.terms.trim().to_string(),
    };

    let rows = billable(ledger)
        .map(|item| InvoiceRow {
            description: display_name(item),
            unit: item.unit.clone(),
            quantity: format_quantity(item.quantity),
            unit_cost: format_money_or_blank(item.unit_cost),
            line_total: format_money(item.line_total()),
        })
        .collect();

    InvoiceView {
        parties,
        rows,
        summary: ViewSummary::from(&breakdown.formatted()),
        navigate_to: ActiveView::Invoice,
    }
}
