//! CSV import of material line items.
//!
//! ## CSV Format
//!
//! Columns are matched by header name; order does not matter and every
//! column is optional. Cells are raw text and go through the same numeric
//! coercion as typed input, so a malformed number becomes `0` instead of
//! failing the import.
//!
//! | Column      | Type    | Notes                                   |
//! |-------------|---------|-----------------------------------------|
//! | `name`      | string  | Material or description                 |
//! | `unit`      | string  | e.g. `bag`, `cu ft`                     |
//! | `quantity`  | decimal | Grouping commas allowed if quoted       |
//! | `unit_cost` | decimal | Leave empty for an unpriced row         |
//!
//! ### Example
//!
//! ```csv
//! name,unit,quantity,unit_cost
//! Cement,bag,10,350
//! River Sand,cu ft,"1,200",42.50
//! ```
//!
//! Inline items (`--item`) use the same four fields by position without a
//! header: `"Cement,bag,10,350"`.
use estimate_core::LineItemDraft;
use estimate_core::calculations::common::coerce_decimal;
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    name: Option<String>,
    unit: Option<String>,
    quantity: Option<String>,
    unit_cost: Option<String>,
}

impl From<CsvRow> for LineItemDraft {
    fn from(row: CsvRow) -> Self {
        Self {
            name: row.name,
            unit: row.unit,
            quantity: row.quantity.as_deref().map(coerce_decimal),
            unit_cost: row.unit_cost.as_deref().map(coerce_decimal),
        }
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading line items.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The CSV is structurally invalid (ragged rows, bad quoting, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An inline item had no fields at all.
    #[error("empty inline item")]
    EmptyItem,
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text with a header row and return one draft per data row, in
/// file order.
pub fn load_from_str(input: &str) -> Result<Vec<LineItemDraft>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let drafts = reader
        .deserialize::<CsvRow>()
        .map(|result| result.map(LineItemDraft::from))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = drafts.len(), "parsed material CSV");
    Ok(drafts)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<LineItemDraft>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

/// Parse one headerless `name,unit,quantity,unit_cost` record. Trailing
/// fields may be left off.
pub fn parse_inline_item(input: &str) -> Result<LineItemDraft, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let record = reader
        .records()
        .next()
        .ok_or(CsvLoadError::EmptyItem)??;

    let field = |i: usize| record.get(i).map(str::to_string);
    Ok(LineItemDraft::from(CsvRow {
        name: field(0),
        unit: field(1),
        quantity: field(2),
        unit_cost: field(3),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
