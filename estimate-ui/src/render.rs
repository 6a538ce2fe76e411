//! Plain-text rendering of the estimate, quantity and invoice views.
//!
//! Each wrapper borrows a core view and implements [`fmt::Display`], so the
//! caller decides where the text goes.

use std::fmt;

use estimate_core::{EstimateRender, InvoiceView, QuantityView, ViewSummary};

/// Column alignment for [`write_table`].
#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Writes a header, a rule and the rows with every column padded to its
/// widest cell. Widths count characters, so `₹` is one column.
fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[(&str, Align)],
    rows: &[Vec<String>],
) -> fmt::Result {
    let mut widths: Vec<usize> = headers.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(f, "{}", format_row(headers.iter().map(|(h, _)| *h), headers, &widths))?;
    let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(f, "{}", "-".repeat(rule_width))?;
    for row in rows {
        writeln!(f, "{}", format_row(row.iter().map(String::as_str), headers, &widths))?;
    }
    Ok(())
}

fn format_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    headers: &[(&str, Align)],
    widths: &[usize],
) -> String {
    cells
        .zip(headers)
        .zip(widths)
        .map(|((cell, (_, align)), &width)| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn write_summary(
    f: &mut fmt::Formatter<'_>,
    summary: &ViewSummary,
) -> fmt::Result {
    writeln!(f, "Material subtotal:  {}", summary.material_subtotal)?;
    writeln!(f, "Labor:              {}", summary.labor_cost)?;
    writeln!(f, "Markup:             {}", summary.markup)?;
    writeln!(f, "Tax:                {}", summary.tax)?;
    writeln!(f, "Grand total:        {}", summary.grand_total)
}

/// The editable ledger with live line totals and the six totals.
pub struct EstimateTable<'a>(pub &'a EstimateRender);

impl fmt::Display for EstimateTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rows: Vec<Vec<String>> = self
            .0
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                vec![
                    (i + 1).to_string(),
                    r.name.clone(),
                    r.unit.clone(),
                    r.quantity.clone(),
                    r.unit_cost.clone(),
                    r.line_total.clone(),
                ]
            })
            .collect();

        writeln!(f, "ESTIMATE")?;
        write_table(
            f,
            &[
                ("#", Align::Right),
                ("Material", Align::Left),
                ("Unit", Align::Left),
                ("Qty", Align::Right),
                ("Unit cost", Align::Right),
                ("Total", Align::Right),
            ],
            &rows,
        )?;
        writeln!(f)?;

        let totals = &self.0.totals;
        writeln!(f, "Material subtotal:    {}", totals.material_subtotal)?;
        writeln!(f, "Labor:                {}", totals.labor_cost)?;
        writeln!(f, "Markup:               {}", totals.markup)?;
        writeln!(f, "Subtotal before tax:  {}", totals.subtotal_before_tax)?;
        writeln!(f, "Tax:                  {}", totals.tax)?;
        writeln!(f, "Grand total:          {}", totals.grand_total)
    }
}

/// Read-only bill of quantities.
pub struct QuantityTable<'a>(pub &'a QuantityView);

impl fmt::Display for QuantityTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rows: Vec<Vec<String>> = self
            .0
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.unit.clone(),
                    r.quantity.clone(),
                    r.unit_cost.clone(),
                    r.line_total.clone(),
                ]
            })
            .collect();

        writeln!(f, "BILL OF QUANTITIES")?;
        write_table(
            f,
            &[
                ("Description", Align::Left),
                ("Unit", Align::Left),
                ("Qty", Align::Right),
                ("Rate", Align::Right),
                ("Amount", Align::Right),
            ],
            &rows,
        )?;
        writeln!(f)?;
        write_summary(f, &self.0.summary)
    }
}

/// Printable invoice.
pub struct InvoiceDocument<'a>(pub &'a InvoiceView);

impl fmt::Display for InvoiceDocument<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let view = self.0;
        let parties = &view.parties;

        writeln!(f, "INVOICE")?;
        if !parties.invoice_number.is_empty() {
            writeln!(f, "Invoice no.:  {}", parties.invoice_number)?;
        }
        if !parties.invoice_date.is_empty() {
            writeln!(f, "Date:         {}", parties.invoice_date)?;
        }
        if !parties.due_date.is_empty() {
            writeln!(f, "Due:          {}", parties.due_date)?;
        }
        writeln!(f)?;
        writeln!(f, "Bill to:      {}", parties.client_name)?;
        writeln!(f, "              {}", parties.client_address)?;
        writeln!(f, "Project:      {}", parties.project_name)?;
        writeln!(f, "              {}", parties.project_location)?;
        if !parties.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", parties.description)?;
        }
        writeln!(f)?;

        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.description.clone(),
                    r.unit.clone(),
                    r.quantity.clone(),
                    r.unit_cost.clone(),
                    r.line_total.clone(),
                ]
            })
            .collect();
        write_table(
            f,
            &[
                ("Description", Align::Left),
                ("Unit", Align::Left),
                ("Qty", Align::Right),
                ("Unit price", Align::Right),
                ("Amount", Align::Right),
            ],
            &rows,
        )?;
        writeln!(f)?;
        write_summary(f, &view.summary)?;

        if !parties.terms.is_empty() {
            writeln!(f)?;
            writeln!(f, "Terms: {}", parties.terms)?;
        }
        Ok(())
    }
}
