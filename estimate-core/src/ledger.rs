//! The material ledger: an ordered, user-editable list of line items.
//!
//! Insertion order is display order. Edits and removals never reorder the
//! remaining rows. Operations addressed at a row that does not exist are
//! ignored rather than reported.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::coerce_decimal;
use crate::calculations::estimate_quantity;
use crate::{
    AreaCoefficients, LineItem, LineItemDraft, LineItemField, MaterialCategory, MaterialTemplate,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Appends a new row and returns its index.
    pub fn add_item(
        &mut self,
        draft: LineItemDraft,
    ) -> usize {
        self.items.push(LineItem::from(draft));
        let index = self.items.len() - 1;
        debug!(index, "added line item");
        index
    }

    /// Removes the row at `index`, returning it. Out of range is a no-op.
    pub fn remove_item(
        &mut self,
        index: usize,
    ) -> Option<LineItem> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "ignoring removal of missing row");
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Writes raw user input into one field of a row.
    ///
    /// Numbers are coerced (bad input becomes zero); text is trimmed.
    /// Returns `false` when `index` is out of range.
    pub fn update_field(
        &mut self,
        index: usize,
        field: LineItemField,
        raw: &str,
    ) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            debug!(index, ?field, "ignoring edit of missing row");
            return false;
        };

        match field {
            LineItemField::Name => item.name = raw.trim().to_string(),
            LineItemField::Unit => item.unit = raw.trim().to_string(),
            LineItemField::Quantity => item.quantity = coerce_decimal(raw),
            LineItemField::UnitCost => item.unit_cost = coerce_decimal(raw),
        }
        true
    }

    /// Appends a heuristic row for `category` sized from `project_area`.
    ///
    /// The new row has the category's name and unit and no unit cost.
    /// Returns `None` without touching the ledger when the area is not
    /// positive.
    pub fn estimate_from_area(
        &mut self,
        category: MaterialCategory,
        project_area: Decimal,
        coefficients: &AreaCoefficients,
    ) -> Option<usize> {
        let quantity = estimate_quantity(category, project_area, coefficients)?;
        debug!(%category, %project_area, %quantity, "estimated quantity from area");

        Some(self.add_item(LineItemDraft {
            name: Some(category.item_name().to_string()),
            unit: Some(category.unit().to_string()),
            quantity: Some(quantity),
            unit_cost: None,
        }))
    }

    /// Appends a row pre-filled with a library template's name and unit.
    pub fn add_template(
        &mut self,
        template: &MaterialTemplate,
    ) -> usize {
        self.add_item(LineItemDraft {
            name: Some(template.name.clone()),
            unit: Some(template.unit.clone()),
            ..Default::default()
        })
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
