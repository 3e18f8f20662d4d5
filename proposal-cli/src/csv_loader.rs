//! CSV loader for material price-list data.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does **not**
//! matter (headers are matched by name). All header names are case-sensitive
//! and must match exactly.
//!
//! | Column         | Required | Type    | Notes                                   |
//! |----------------|----------|---------|-----------------------------------------|
//! | `product_code` | no       | string  |                                         |
//! | `description`  | yes      | string  |                                         |
//! | `dimensions`   | no       | string  |                                         |
//! | `request_qty`  | yes      | decimal | e.g. `238`                              |
//! | `ship_qty`     | no       | decimal | Empty cell means "same as request_qty"  |
//! | `unit`         | no       | string  | Empty cell keeps the default (`Ad.`)    |
//! | `unit_price`   | yes      | decimal | e.g. `1.20`                             |
//! | `line_total`   | no       | decimal | Manual override; empty means derived    |
//!
//! ### Minimal example
//!
//! ```csv
//! description,request_qty,unit_price
//! Kenar İzolasyon Bandı,26,0.85
//! ```
//!
//! ### Full example
//!
//! ```csv
//! product_code,description,dimensions,request_qty,ship_qty,unit,unit_price,line_total
//! 71016906,PE-Xa Boru,16 x 2 mm,238,238,m,1.20,
//! ,İzolasyon Plakası,,24,,m2,5.50,130.00
//! ```

use std::io;
use std::path::{Path, PathBuf};

use proposal_core::{MaterialLineUpdate, ProposalDocument};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    product_code: String,
    description: String,
    #[serde(default)]
    dimensions: String,
    request_qty: Decimal,
    ship_qty: Option<Decimal>,
    #[serde(default)]
    unit: String,
    unit_price: Decimal,
    line_total: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading material records from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvImportError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The CSV file could not be read from disk.
    #[error("cannot read CSV file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// One material record parsed from a price list. No validation is applied
/// to quantities or prices; negative values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRecord {
    pub product_code: String,
    pub description: String,
    pub dimensions: String,
    pub request_qty: Decimal,
    /// `None` means "ship the requested quantity".
    pub ship_qty: Option<Decimal>,
    /// Empty means "keep the default unit label".
    pub unit: String,
    pub unit_price: Decimal,
    pub line_total: Option<Decimal>,
}

impl From<CsvRow> for MaterialRecord {
    fn from(row: CsvRow) -> Self {
        Self {
            product_code: row.product_code,
            description: row.description,
            dimensions: row.dimensions,
            request_qty: row.request_qty,
            ship_qty: row.ship_qty,
            unit: row.unit,
            unit_price: row.unit_price,
            line_total: row.line_total,
        }
    }
}

/// Parse CSV text (the full file contents as a &str) and return a vector of
/// MaterialRecord. Rows are returned in file order.
///
/// # Errors
///
/// * [CsvImportError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
pub fn load_from_str(input: &str) -> Result<Vec<MaterialRecord>, CsvImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .map(|result| Ok(MaterialRecord::from(result?)))
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<MaterialRecord>, CsvImportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CsvImportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_from_str(&contents)
}

/// Appends the records to the document's materials list through the normal
/// mutation operations, exactly as a form binding would: one line per
/// record, each field applied as a single-field update. Returns the number
/// of appended lines.
pub fn append_to(
    doc: &mut ProposalDocument,
    records: &[MaterialRecord],
) -> usize {
    for record in records {
        let id = doc.add_material_line();
        doc.update_material_line(
            id,
            MaterialLineUpdate::ProductCode(record.product_code.clone()),
        );
        doc.update_material_line(
            id,
            MaterialLineUpdate::Description(record.description.clone()),
        );
        doc.update_material_line(
            id,
            MaterialLineUpdate::Dimensions(record.dimensions.clone()),
        );
        doc.update_material_line(id, MaterialLineUpdate::RequestQty(record.request_qty));
        doc.update_material_line(
            id,
            MaterialLineUpdate::ShipQty(record.ship_qty.unwrap_or(record.request_qty)),
        );
        if !record.unit.is_empty() {
            doc.update_material_line(id, MaterialLineUpdate::Unit(record.unit.clone()));
        }
        doc.update_material_line(id, MaterialLineUpdate::UnitPrice(record.unit_price));
        if record.line_total.is_some() {
            doc.update_material_line(id, MaterialLineUpdate::ManualTotal(record.line_total));
        }
    }
    debug!(count = records.len(), "materials appended from CSV");
    records.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
