//! Teacher roster CSV ingestion.
//!
//! Roster files have one header row followed by rows of
//! `Name, CNIC, IsClassTeacher (Y/N), Subjects`. As with registration
//! imports, bad rows are recorded and skipped rather than aborting the
//! batch.

use std::path::Path;

use csv::ReaderBuilder;

use registry_model::Teacher;
use registry_normalize::normalize_national_id;

use crate::error::{IngestError, Result};
use crate::report::RowFailure;

const ROSTER_WIDTH: usize = 4;

/// Outcome of ingesting one roster CSV file.
#[derive(Debug, Default)]
pub struct RosterImport {
    /// Valid roster rows, with their spreadsheet row numbers.
    pub teachers: Vec<(usize, Teacher)>,
    pub failures: Vec<RowFailure>,
}

impl RosterImport {
    pub fn total_rows(&self) -> usize {
        self.teachers.len() + self.failures.len()
    }
}

/// Reads a teacher roster CSV, returning valid entries and per-row
/// failures.
///
/// # Errors
///
/// Fails when the file cannot be read or has no header row. Bad data rows
/// are collected in the result, not returned as errors.
pub fn read_teacher_roster(path: &Path) -> Result<RosterImport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    if records.next().transpose()?.is_none() {
        return Err(IngestError::MissingHeader);
    }

    let mut import = RosterImport::default();
    let mut row_number = 1;
    for record in records {
        let record = record?;
        row_number += 1;
        if record.len() < ROSTER_WIDTH {
            import.failures.push(RowFailure::new(
                row_number,
                "(unknown)",
                format!("not enough columns: {}/{ROSTER_WIDTH}", record.len()),
            ));
            continue;
        }
        let name = record[0].trim().to_string();
        if name.is_empty() {
            import
                .failures
                .push(RowFailure::new(row_number, "(unknown)", "teacher name is empty"));
            continue;
        }
        let cnic = normalize_national_id(record[1].trim());
        if !cnic.is_canonical() {
            import.failures.push(RowFailure::new(
                row_number,
                &name,
                format!("invalid CNIC {:?}", record[1].trim()),
            ));
            continue;
        }
        let is_class_teacher = match record[2].trim().to_uppercase().as_str() {
            "Y" => true,
            "N" => false,
            other => {
                import.failures.push(RowFailure::new(
                    row_number,
                    &name,
                    format!("class-teacher flag must be Y or N, got {other:?}"),
                ));
                continue;
            }
        };
        let subjects = record[3].trim().to_string();
        import.teachers.push((
            row_number,
            Teacher::new(name, cnic.into_value(), is_class_teacher, subjects),
        ));
    }
    Ok(import)
}
