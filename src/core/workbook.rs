//! Workbook loading - fetch and parse the Parts/MRO spreadsheet
//!
//! The loader fetches bytes from the source, validates that they are an
//! XLSX workbook, and parses the two named sheets into row collections.
//! Any missing sheet or column fails the whole load; no partial tables
//! are ever handed to callers.

use calamine::{Data, Range, Reader, Xlsx};
use miette::Diagnostic;
use std::collections::HashMap;
use std::io::Cursor;
use thiserror::Error;

use crate::core::source::DataSource;
use crate::records::{MroRecord, PartRecord};

pub const PARTS_SHEET: &str = "Parts";
pub const MRO_SHEET: &str = "MRO";

/// Content types accepted for URL sources. Servers that do not know the
/// XLSX type commonly declare octet-stream, so that is allowed through.
const SPREADSHEET_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/octet-stream",
];

/// Errors raised while fetching or parsing a workbook (DataUnavailable family)
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to fetch workbook from {url}")]
    #[diagnostic(
        code(collateral::data::unreachable),
        help("check the URL and your network connection")
    )]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("workbook fetch returned HTTP {status} for {url}")]
    #[diagnostic(code(collateral::data::http_status))]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{source_name} is not a spreadsheet (content type: {content_type})")]
    #[diagnostic(
        code(collateral::data::not_spreadsheet),
        help("the source must be an .xlsx workbook")
    )]
    NotSpreadsheet {
        source_name: String,
        content_type: String,
    },

    #[error("failed to read workbook from {path}")]
    #[diagnostic(code(collateral::data::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workbook")]
    #[diagnostic(
        code(collateral::data::workbook),
        help("the source must be an .xlsx workbook")
    )]
    Workbook(#[from] calamine::XlsxError),

    #[error("workbook has no \"{name}\" sheet")]
    #[diagnostic(
        code(collateral::data::missing_sheet),
        help("the workbook needs a \"Parts\" sheet and an \"MRO\" sheet")
    )]
    MissingSheet { name: String },

    #[error("sheet \"{sheet}\" has no \"{column}\" column")]
    #[diagnostic(code(collateral::data::missing_column))]
    MissingColumn { sheet: String, column: String },
}

/// The two parsed tables of an aircraft-parts workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    pub parts: Vec<PartRecord>,
    pub mro: Vec<MroRecord>,
}

impl Workbook {
    /// Load and parse a workbook from a path or URL
    pub fn load(source: &DataSource) -> Result<Self, LoadError> {
        let bytes = match source {
            DataSource::Url(url) => fetch(url)?,
            DataSource::Path(path) => std::fs::read(path).map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                source: e,
            })?,
        };
        Self::from_bytes(bytes)
    }

    /// Parse workbook bytes into the two tables
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        let mut workbook = Xlsx::new(Cursor::new(bytes))?;

        let parts_range = sheet_range(&mut workbook, PARTS_SHEET)?;
        let mro_range = sheet_range(&mut workbook, MRO_SHEET)?;

        Ok(Self {
            parts: parse_parts(&parts_range)?,
            mro: parse_mro(&mro_range)?,
        })
    }

    /// Distinct aircraft models from the Parts sheet, sorted
    pub fn models(&self) -> Vec<String> {
        let mut models: Vec<String> = self
            .parts
            .iter()
            .map(|p| p.aircraft_model.clone())
            .collect();
        models.sort();
        models.dedup();
        models
    }
}

/// Fetch workbook bytes from a URL, validating status and content type
fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::blocking::get(url).map_err(|e| LoadError::Unreachable {
        url: url.to_string(),
        source: e,
    })?;

    if !response.status().is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        validate_content_type(url, content_type)?;
    }

    let bytes = response.bytes().map_err(|e| LoadError::Unreachable {
        url: url.to_string(),
        source: e,
    })?;
    Ok(bytes.to_vec())
}

/// Check a declared Content-Type against the accepted spreadsheet types
fn validate_content_type(source_name: &str, content_type: &str) -> Result<(), LoadError> {
    // Strip parameters like "; charset=utf-8" before comparing
    let declared = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if !SPREADSHEET_CONTENT_TYPES.contains(&declared.as_str()) {
        return Err(LoadError::NotSpreadsheet {
            source_name: source_name.to_string(),
            content_type: declared,
        });
    }
    Ok(())
}

fn sheet_range(
    workbook: &mut Xlsx<Cursor<Vec<u8>>>,
    name: &str,
) -> Result<Range<Data>, LoadError> {
    if !workbook.sheet_names().iter().any(|s| s == name) {
        return Err(LoadError::MissingSheet {
            name: name.to_string(),
        });
    }
    Ok(workbook.worksheet_range(name)?)
}

/// Build a map from lowercased, trimmed header name to column index
fn header_map(range: &Range<Data>) -> HashMap<String, usize> {
    range
        .rows()
        .next()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| (cell.to_string().trim().to_lowercase(), i))
                .collect()
        })
        .unwrap_or_default()
}

fn column(
    headers: &HashMap<String, usize>,
    sheet: &str,
    name: &str,
) -> Result<usize, LoadError> {
    headers
        .get(&name.to_lowercase())
        .copied()
        .ok_or_else(|| LoadError::MissingColumn {
            sheet: sheet.to_string(),
            column: name.to_string(),
        })
}

fn cell_text(row: &[Data], idx: usize) -> String {
    row.get(idx)
        .map(|cell| cell.to_string().trim().to_string())
        .unwrap_or_default()
}

fn parse_parts(range: &Range<Data>) -> Result<Vec<PartRecord>, LoadError> {
    let headers = header_map(range);
    let model = column(&headers, PARTS_SHEET, "Aircraft Model")?;
    let part_number = column(&headers, PARTS_SHEET, "Part Number")?;
    let description = column(&headers, PARTS_SHEET, "Description")?;

    let mut records = Vec::new();
    for row in range.rows().skip(1) {
        let record = PartRecord {
            aircraft_model: cell_text(row, model),
            part_number: cell_text(row, part_number),
            description: cell_text(row, description),
        };
        // Blank trailing rows are common in hand-edited spreadsheets
        if record.aircraft_model.is_empty() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_mro(range: &Range<Data>) -> Result<Vec<MroRecord>, LoadError> {
    let headers = header_map(range);
    let model = column(&headers, MRO_SHEET, "Aircraft Model")?;
    let capability = column(&headers, MRO_SHEET, "Capability")?;
    let facility = column(&headers, MRO_SHEET, "Facility")?;

    let mut records = Vec::new();
    for row in range.rows().skip(1) {
        let record = MroRecord {
            aircraft_model: cell_text(row, model),
            capability: cell_text(row, capability),
            facility: cell_text(row, facility),
        };
        if record.aircraft_model.is_empty() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}
