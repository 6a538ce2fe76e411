//! Estimator configuration file.
//!
//! ## TOML Format
//!
//! Every section is optional; anything left out keeps its default.
//!
//! ```toml
//! # quantity per unit of project area, rounded to `decimals` places
//! [area_coefficients.brick]
//! factor = "4.7"
//! decimals = 0
//!
//! [area_coefficients.cement]
//! factor = "0.056"
//! decimals = 1
//!
//! # material library
//! [[templates]]
//! name = "River Sand"
//! unit = "cu ft"
//! ```
//!
//! Factors are decimal strings so they are read exactly. Supplying
//! `templates` replaces the built-in library rather than extending it.

use std::path::Path;

use estimate_core::{AreaCoefficients, MaterialTemplate};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub area_coefficients: AreaCoefficients,
    pub templates: Vec<MaterialTemplate>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            area_coefficients: AreaCoefficients::default(),
            templates: default_templates(),
        }
    }
}

/// Built-in material library.
fn default_templates() -> Vec<MaterialTemplate> {
    vec![
        MaterialTemplate::new("Portland Cement (OPC 53)", "bag"),
        MaterialTemplate::new("River Sand", "cu ft"),
        MaterialTemplate::new("Coarse Aggregate 20mm", "cu ft"),
        MaterialTemplate::new("TMT Steel Bar", "kg"),
        MaterialTemplate::new("Red Clay Brick", "pcs"),
        MaterialTemplate::new("Vitrified Floor Tile", "sq ft"),
        MaterialTemplate::new("Exterior Emulsion Paint", "L"),
    ]
}

impl EstimatorConfig {
    pub fn load_from_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::load_from_str(&contents)?;
        debug!(
            path = %path.display(),
            templates = config.templates.len(),
            "loaded estimator config"
        );
        Ok(config)
    }

    /// Looks a template up by name, ignoring case and surrounding whitespace.
    pub fn find_template(
        &self,
        name: &str,
    ) -> Option<&MaterialTemplate> {
        let wanted = name.trim();
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(wanted))
    }
}
