use serde::{Deserialize, Serialize};

use crate::form::{CHILD_NAME, FORM_WIDTH};
use crate::ids::{AcademicYear, RegNo};
use crate::{ModelError, column_index};

/// A complete registration form submission, ready for storage.
///
/// `values` holds the 62 form columns in schema order, already trimmed and
/// normalized. The registration number is allocated at insert time and
/// stored on the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub reg_no: RegNo,
    pub academic_year: AcademicYear,
    pub is_active: bool,
    pub values: Vec<String>,
}

impl RegistrationRecord {
    pub fn new(
        reg_no: RegNo,
        academic_year: AcademicYear,
        values: Vec<String>,
    ) -> Result<Self, ModelError> {
        if values.len() != FORM_WIDTH {
            return Err(ModelError::FieldCountMismatch {
                found: values.len(),
                expected: FORM_WIDTH,
            });
        }
        Ok(Self {
            reg_no,
            academic_year,
            is_active: true,
            values,
        })
    }

    pub fn child_name(&self) -> &str {
        &self.values[CHILD_NAME]
    }

    /// The value of a form column by storage name, if the name is known.
    pub fn value(&self, column: &str) -> Option<&str> {
        column_index(column).map(|i| self.values[i].as_str())
    }
}

/// The columns shown by `register list`, mirroring the original view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSummary {
    pub reg_no: String,
    pub child_name: String,
    pub gender: String,
    pub child_dob: String,
    pub father_name: String,
    pub father_cnic: String,
    pub father_mobile: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_values() -> Vec<String> {
        let mut values = vec![String::new(); FORM_WIDTH];
        values[CHILD_NAME] = "Ayesha".to_string();
        values
    }

    #[test]
    fn record_exposes_child_name_and_columns() {
        let record = RegistrationRecord::new(
            RegNo::new("20250001").expect("reg no"),
            AcademicYear::new("2025-2026").expect("year"),
            blank_values(),
        )
        .expect("record");
        assert_eq!(record.child_name(), "Ayesha");
        assert_eq!(record.value("child_name"), Some("Ayesha"));
        assert_eq!(record.value("missing"), None);
        assert!(record.is_active);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let err = RegistrationRecord::new(
            RegNo::new("20250001").expect("reg no"),
            AcademicYear::new("2025").expect("year"),
            vec![String::new(); 10],
        )
        .expect_err("short row");
        assert!(matches!(
            err,
            ModelError::FieldCountMismatch {
                found: 10,
                expected: FORM_WIDTH
            }
        ));
    }
}
