use serde::{Deserialize, Serialize};

/// A library entry that pre-fills the name and unit of a new line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTemplate {
    pub name: String,
    pub unit: String,
}

impl MaterialTemplate {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
        }
    }
}
