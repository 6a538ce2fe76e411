use serde::{Deserialize, Serialize};

/// The presentation the hosting surface should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveView {
    /// Editable ledger with live totals.
    #[default]
    Estimate,
    /// Read-only bill of quantities.
    Quantity,
    /// Printable invoice.
    Invoice,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Estimate => "estimate",
            Self::Quantity => "quantity",
            Self::Invoice => "invoice",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "estimate" => Some(Self::Estimate),
            "quantity" => Some(Self::Quantity),
            "invoice" => Some(Self::Invoice),
            _ => None,
        }
    }
}
