use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use registry_ingest::{IngestError, read_registration_csv};
use registry_model::{FORM_WIDTH, column_index, registration_form};

fn blank_row() -> Vec<String> {
    vec![String::new(); FORM_WIDTH]
}

fn csv_line(cells: &[String]) -> String {
    cells.join(",")
}

fn write_csv(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("write csv");
    path
}

fn header_line() -> String {
    let names: Vec<String> = registration_form()
        .iter()
        .map(|f| f.name.to_string())
        .collect();
    csv_line(&names)
}

fn set(row: &mut [String], column: &str, value: &str) {
    let index = column_index(column).expect("known column");
    row[index] = value.to_string();
}

#[test]
fn valid_rows_are_normalized() {
    let dir = TempDir::new().expect("temp dir");
    let mut row = blank_row();
    set(&mut row, "child_name", "Ayesha Khan");
    set(&mut row, "child_dob", "02-01-2019");
    set(&mut row, "father_cnic", "42101-1234567-1");
    set(&mut row, "father_mobile1", "0300-1234567");
    set(&mut row, "home_phone1", "021-34567890");
    let path = write_csv(
        &dir,
        "students.csv",
        &[csv_line(&blank_row()), header_line(), csv_line(&row)],
    );

    let import = read_registration_csv(&path).expect("read csv");
    assert_eq!(import.total_rows(), 1);
    assert!(import.failures.is_empty());

    let parsed = &import.rows[0];
    assert_eq!(parsed.row_number, 3);
    assert_eq!(parsed.child_name(), "Ayesha Khan");
    let value = |column: &str| parsed.values[column_index(column).unwrap()].as_str();
    assert_eq!(value("child_dob"), "2019-01-02");
    assert_eq!(value("father_cnic"), "4210112345671");
    assert_eq!(value("father_mobile1"), "+92-3001234567");
    // Landline number: kept exactly as entered.
    assert_eq!(value("home_phone1"), "021-34567890");
}

#[test]
fn short_and_nameless_rows_are_collected_as_failures() {
    let dir = TempDir::new().expect("temp dir");
    let mut named = blank_row();
    set(&mut named, "child_name", "Bilal");
    let path = write_csv(
        &dir,
        "students.csv",
        &[
            csv_line(&blank_row()),
            header_line(),
            "a,b,c".to_string(),
            csv_line(&blank_row()),
            csv_line(&named),
        ],
    );

    let import = read_registration_csv(&path).expect("read csv");
    assert_eq!(import.total_rows(), 3);
    assert_eq!(import.rows.len(), 1);
    assert_eq!(import.rows[0].child_name(), "Bilal");

    assert_eq!(import.failures.len(), 2);
    assert_eq!(import.failures[0].row_number, 3);
    assert!(import.failures[0].reason.contains("not enough columns"));
    assert_eq!(import.failures[1].row_number, 4);
    assert!(import.failures[1].reason.contains("child name is empty"));
}

#[test]
fn narrow_header_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "students.csv",
        &["sample".to_string(), "a,b,c".to_string()],
    );

    let error = read_registration_csv(&path).expect_err("narrow header");
    assert!(matches!(
        error,
        IngestError::HeaderTooNarrow {
            found: 3,
            expected: FORM_WIDTH
        }
    ));
}

#[test]
fn empty_file_is_missing_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("students.csv");
    fs::write(&path, "").expect("write csv");

    let error = read_registration_csv(&path).expect_err("empty file");
    assert!(matches!(error, IngestError::MissingHeader));
}
