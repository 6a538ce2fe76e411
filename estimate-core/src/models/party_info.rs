use serde::{Deserialize, Serialize};

/// Client, project and invoice details shown on the invoice view.
///
/// Values are stored exactly as typed; placeholders for blank fields are only
/// substituted when the invoice is projected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyInfo {
    pub client_name: String,
    pub client_address: String,
    pub project_name: String,
    pub project_location: String,

    // Passed through to the invoice unchanged
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub description: String,
    pub terms: String,
}

/// Identifies one of the [`PartyInfo`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyField {
    ClientName,
    ClientAddress,
    ProjectName,
    ProjectLocation,
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    Description,
    Terms,
}

impl PartyInfo {
    pub fn set(
        &mut self,
        field: PartyField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        let slot = match field {
            PartyField::ClientName => &mut self.client_name,
            PartyField::ClientAddress => &mut self.client_address,
            PartyField::ProjectName => &mut self.project_name,
            PartyField::ProjectLocation => &mut self.project_location,
            PartyField::InvoiceNumber => &mut self.invoice_number,
            PartyField::InvoiceDate => &mut self.invoice_date,
            PartyField::DueDate => &mut self.due_date,
            PartyField::Description => &mut self.description,
            PartyField::Terms => &mut self.terms,
        };
        *slot = value;
    }
}
