//! The student registration form schema.
//!
//! Registration data arrives as 62 positional columns (spreadsheet columns
//! A through BJ). The schema below is the single source of truth for column
//! order, console labels, and which normalizer applies to each column: the
//! SQL table definition, CSV ingestion, and interactive entry are all
//! driven from it.

/// Which normalization applies to a form column before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored as entered (trimmed only).
    Text,
    /// Day-month-year input canonicalized to `YYYY-MM-DD` when parseable.
    DateOfBirth,
    /// National identity number canonicalized to 13 digits when parseable.
    NationalId,
    /// Phone number canonicalized to `+92-XXXXXXXXXX` when parseable.
    Phone,
}

/// One column of the registration form.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    /// Storage column name.
    pub name: &'static str,
    /// Console label, with the spreadsheet column letter operators see.
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Index of the child-name column (spreadsheet column D), the only field
/// the original form treats as required.
pub const CHILD_NAME: usize = 3;

/// Number of columns in the registration form.
pub const FORM_WIDTH: usize = 62;

const FORM: [FormField; FORM_WIDTH] = [
    field("form_no", "Form No (A)", FieldKind::Text),
    field("issue_date", "Issue Date (B)", FieldKind::Text),
    field("valid_till", "Valid Till (C)", FieldKind::Text),
    field("child_name", "Child Name (D)", FieldKind::Text),
    field("child_dob", "Date of Birth (E)", FieldKind::DateOfBirth),
    field("child_age", "Age (F)", FieldKind::Text),
    field("place_of_birth", "Place of Birth (G)", FieldKind::Text),
    field("gender", "Gender (H)", FieldKind::Text),
    field("nationality", "Nationality (I)", FieldKind::Text),
    field("religion", "Religion (J)", FieldKind::Text),
    field(
        "form_b_birth_cert_no",
        "Form B No / Birth Cert No (K)",
        FieldKind::Text,
    ),
    field("class_applied_for", "Class Applied For (L)", FieldKind::Text),
    field("present_address", "Present Address (M)", FieldKind::Text),
    field("permanent_address", "Permanent Address (N)", FieldKind::Text),
    field("home_phone1", "Home Phone 1 (O)", FieldKind::Phone),
    field("home_phone2", "Home Phone 2 (P)", FieldKind::Phone),
    field(
        "previous_school_attended",
        "Previous School Attended (Q)",
        FieldKind::Text,
    ),
    field("class_last_attended", "Class Last Attended (R)", FieldKind::Text),
    field("session_completed", "Session Completed (S)", FieldKind::Text),
    field(
        "reason_for_leaving_last_school",
        "Reason for Leaving (T)",
        FieldKind::Text,
    ),
    field("father_name", "Father Name (U)", FieldKind::Text),
    field("father_dob", "Father DOB (V)", FieldKind::DateOfBirth),
    field("father_nationality", "Father Nationality (W)", FieldKind::Text),
    field("father_religion", "Father Religion (X)", FieldKind::Text),
    field("father_cnic", "Father CNIC (Y)", FieldKind::NationalId),
    field("father_email", "Father Email (Z)", FieldKind::Text),
    field(
        "father_qualification",
        "Father Qualification (AA)",
        FieldKind::Text,
    ),
    field("father_job_type", "Father Job Type (AB)", FieldKind::Text),
    field(
        "father_business_type",
        "Father Business Type (AC)",
        FieldKind::Text,
    ),
    field("father_organization", "Father Organization (AD)", FieldKind::Text),
    field(
        "father_office_address",
        "Father Office Address (AE)",
        FieldKind::Text,
    ),
    field(
        "father_office_phone",
        "Father Office Phone (AF)",
        FieldKind::Phone,
    ),
    field("father_mobile1", "Father Mobile 1 (AG)", FieldKind::Phone),
    field("father_mobile2", "Father Mobile 2 (AH)", FieldKind::Phone),
    field("father_whatsapp", "Father WhatsApp (AI)", FieldKind::Phone),
    field("mother_name", "Mother Name (AJ)", FieldKind::Text),
    field("mother_dob", "Mother DOB (AK)", FieldKind::DateOfBirth),
    field("mother_nationality", "Mother Nationality (AL)", FieldKind::Text),
    field("mother_religion", "Mother Religion (AM)", FieldKind::Text),
    field("mother_cnic", "Mother CNIC (AN)", FieldKind::NationalId),
    field("mother_email", "Mother Email (AO)", FieldKind::Text),
    field(
        "mother_qualification",
        "Mother Qualification (AP)",
        FieldKind::Text,
    ),
    field("mother_job_type", "Mother Job Type (AQ)", FieldKind::Text),
    field(
        "mother_business_type",
        "Mother Business Type (AR)",
        FieldKind::Text,
    ),
    field("mother_organization", "Mother Organization (AS)", FieldKind::Text),
    field(
        "mother_office_address",
        "Mother Office Address (AT)",
        FieldKind::Text,
    ),
    field(
        "mother_office_phone",
        "Mother Office Phone (AU)",
        FieldKind::Phone,
    ),
    field("mother_mobile1", "Mother Mobile 1 (AV)", FieldKind::Phone),
    field("mother_mobile2", "Mother Mobile 2 (AW)", FieldKind::Phone),
    field("mother_whatsapp", "Mother WhatsApp (AX)", FieldKind::Phone),
    field(
        "parents_marital_status",
        "Parents Marital Status (AY)",
        FieldKind::Text,
    ),
    field("child_blood_group", "Child Blood Group (AZ)", FieldKind::Text),
    field(
        "child_medical_conditions",
        "Child Medical Conditions (BA)",
        FieldKind::Text,
    ),
    field("child_disabilities", "Child Disabilities (BB)", FieldKind::Text),
    field(
        "emergency_contact_name",
        "Emergency Contact Name (BC)",
        FieldKind::Text,
    ),
    field(
        "emergency_contact_relation",
        "Emergency Contact Relation (BD)",
        FieldKind::Text,
    ),
    field(
        "emergency_contact_ptcl",
        "Emergency Contact PTCL (BE)",
        FieldKind::Phone,
    ),
    field(
        "emergency_contact_cell",
        "Emergency Contact Cell (BF)",
        FieldKind::Phone,
    ),
    field(
        "other_children_studying_details",
        "Other Children Studying Details (BG)",
        FieldKind::Text,
    ),
    field(
        "siblings_in_school_details",
        "Siblings in School Details (BH)",
        FieldKind::Text,
    ),
    field(
        "relatives_in_school_details",
        "Relatives in School Details (BI)",
        FieldKind::Text,
    ),
    field(
        "relatives_worked_in_school_details",
        "Relatives Worked in School Details (BJ)",
        FieldKind::Text,
    ),
];

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind }
}

/// The registration form columns, in spreadsheet order.
pub fn registration_form() -> &'static [FormField] {
    &FORM
}

/// Looks up a form column index by storage name.
pub fn column_index(name: &str) -> Option<usize> {
    FORM.iter().position(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_has_expected_width() {
        assert_eq!(registration_form().len(), FORM_WIDTH);
    }

    #[test]
    fn child_name_index_matches_schema() {
        assert_eq!(registration_form()[CHILD_NAME].name, "child_name");
    }

    #[test]
    fn normalized_kinds_cover_expected_columns() {
        let dob = FORM.iter().filter(|f| f.kind == FieldKind::DateOfBirth);
        let cnic = FORM.iter().filter(|f| f.kind == FieldKind::NationalId);
        let phone = FORM.iter().filter(|f| f.kind == FieldKind::Phone);
        assert_eq!(dob.count(), 3);
        assert_eq!(cnic.count(), 2);
        assert_eq!(phone.count(), 12);
    }

    #[test]
    fn column_names_are_unique() {
        for (i, a) in FORM.iter().enumerate() {
            for b in &FORM[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate column name");
            }
        }
    }

    #[test]
    fn column_index_round_trips() {
        assert_eq!(column_index("father_cnic"), Some(24));
        assert_eq!(column_index("no_such_column"), None);
    }
}
