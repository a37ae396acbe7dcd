pub mod admission;
pub mod error;
pub mod form;
pub mod ids;
pub mod policy;
pub mod registration;
pub mod teacher;

pub use admission::Admission;
pub use error::{ModelError, Result};
pub use form::{CHILD_NAME, FORM_WIDTH, FieldKind, FormField, column_index, registration_form};
pub use ids::{AcademicYear, GrNo, RegNo};
pub use policy::{AdmissionPolicy, ClassPolicy, RegistrationPolicy};
pub use registration::{RegistrationRecord, RegistrationSummary};
pub use teacher::{ClassAssignment, Teacher};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_serializes() {
        let admission = Admission {
            gr_no: GrNo::new("1000").expect("gr no"),
            reg_no: RegNo::new("20250001").expect("reg no"),
            child_name: "Ayesha".to_string(),
            class_applied_for: "Class 1".to_string(),
            academic_year: AcademicYear::new("2025-2026").expect("year"),
            admitted_on: "2025-04-01".to_string(),
        };
        let json = serde_json::to_string(&admission).expect("serialize admission");
        let round: Admission = serde_json::from_str(&json).expect("deserialize admission");
        assert_eq!(round.gr_no.as_str(), "1000");
        assert_eq!(round.academic_year.base_year(), "2025");
    }
}
