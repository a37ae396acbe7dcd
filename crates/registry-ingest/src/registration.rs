//! Registration form CSV ingestion.
//!
//! The registration spreadsheet export has a fixed shape: row 1 is a
//! sample row, row 2 is the header (62 columns, A through BJ), and data
//! starts at row 3. Rows are validated and normalized independently so one
//! bad row never aborts the batch.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use registry_model::{CHILD_NAME, FORM_WIDTH, FieldKind, registration_form};
use registry_normalize::{
    Normalized, normalize_date_of_birth, normalize_national_id, normalize_phone,
};

use crate::error::{IngestError, Result};
use crate::report::RowFailure;

/// A data row that passed ingestion: 62 trimmed, normalized values in
/// form order.
#[derive(Debug, Clone)]
pub struct ParsedRegistration {
    pub row_number: usize,
    pub values: Vec<String>,
}

impl ParsedRegistration {
    pub fn child_name(&self) -> &str {
        &self.values[CHILD_NAME]
    }
}

/// Outcome of ingesting one registration CSV file.
#[derive(Debug, Default)]
pub struct RegistrationImport {
    pub rows: Vec<ParsedRegistration>,
    pub failures: Vec<RowFailure>,
}

impl RegistrationImport {
    pub fn total_rows(&self) -> usize {
        self.rows.len() + self.failures.len()
    }
}

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Applies the form schema's normalizer to one cell, logging when a
/// date/CNIC/phone value is stored unchanged.
fn normalize_field(kind: FieldKind, value: &str, row_number: usize, column: &str) -> String {
    let normalized = match kind {
        FieldKind::Text => return value.to_string(),
        FieldKind::DateOfBirth => normalize_date_of_birth(value),
        FieldKind::NationalId => normalize_national_id(value),
        FieldKind::Phone => normalize_phone(value),
    };
    log_passthrough(&normalized, row_number, column);
    normalized.into_value()
}

fn log_passthrough(normalized: &Normalized, row_number: usize, column: &str) {
    if !normalized.is_canonical() && !normalized.value().is_empty() {
        warn!(row = row_number, column, "value stored unchanged");
    }
}

/// Reads a registration CSV export, returning normalized rows and per-row
/// failures.
///
/// # Errors
///
/// Fails when the file cannot be read or the header row is missing or has
/// fewer than 62 columns. Bad data rows are collected in the result, not
/// returned as errors.
pub fn read_registration_csv(path: &Path) -> Result<RegistrationImport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    // Row 1 is a sample row; only its absence matters.
    if records.next().transpose()?.is_none() {
        return Err(IngestError::MissingHeader);
    }
    let header = records.next().transpose()?.ok_or(IngestError::MissingHeader)?;
    if header.len() < FORM_WIDTH {
        return Err(IngestError::HeaderTooNarrow {
            found: header.len(),
            expected: FORM_WIDTH,
        });
    }

    let form = registration_form();
    let mut import = RegistrationImport::default();
    let mut row_number = 2;
    for record in records {
        let record = record?;
        row_number += 1;
        if record.len() < FORM_WIDTH {
            import.failures.push(RowFailure::new(
                row_number,
                "(unknown)",
                format!("not enough columns: {}/{FORM_WIDTH}", record.len()),
            ));
            continue;
        }
        let values: Vec<String> = form
            .iter()
            .zip(record.iter())
            .map(|(field, cell)| {
                normalize_field(field.kind, &clean_cell(cell), row_number, field.name)
            })
            .collect();
        if values[CHILD_NAME].is_empty() {
            import.failures.push(RowFailure::new(
                row_number,
                "(unknown)",
                "child name is empty (col D)",
            ));
            continue;
        }
        import.rows.push(ParsedRegistration { row_number, values });
    }
    Ok(import)
}
