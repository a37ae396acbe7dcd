//! Integration tests against an in-memory database.

use registry_model::{
    AcademicYear, AdmissionPolicy, ClassAssignment, ClassPolicy, GrNo, RegNo, RegistrationPolicy,
    RegistrationRecord, Teacher, column_index, registration_form,
};
use registry_store::{
    RegistryDb, StoreError, next_admission_number, next_registration_number,
};

fn record(reg_no: &str, year: &str, child_name: &str) -> RegistrationRecord {
    let mut values = vec![String::new(); registration_form().len()];
    values[column_index("child_name").unwrap()] = child_name.to_string();
    values[column_index("class_applied_for").unwrap()] = "Class 1".to_string();
    values[column_index("gender").unwrap()] = "F".to_string();
    RegistrationRecord::new(
        RegNo::new(reg_no).unwrap(),
        AcademicYear::new(year).unwrap(),
        values,
    )
    .unwrap()
}

#[tokio::test]
async fn registration_numbers_seed_and_increment_per_year() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    let year = AcademicYear::new("2025-2026").unwrap();

    let first = next_registration_number(&db, &year).await.unwrap();
    assert_eq!(first.as_str(), "20250001");

    db.insert_registration(&record("20250001", "2025-2026", "Ayesha"))
        .await
        .unwrap();
    db.insert_registration(&record("20250007", "2025-2026", "Bilal"))
        .await
        .unwrap();

    let next = next_registration_number(&db, &year).await.unwrap();
    assert_eq!(next.as_str(), "20250008");

    // A different year scopes its own sequence.
    let other = AcademicYear::new("2026-2027").unwrap();
    let first_of_other = next_registration_number(&db, &other).await.unwrap();
    assert_eq!(first_of_other.as_str(), "20260001");
}

#[tokio::test]
async fn corrupt_registration_suffix_is_fatal_not_a_fresh_scope() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    db.insert_registration(&record("2025ABCD", "2025-2026", "Ayesha"))
        .await
        .unwrap();

    let year = AcademicYear::new("2025-2026").unwrap();
    let error = next_registration_number(&db, &year).await.unwrap_err();
    assert!(matches!(
        error,
        StoreError::CorruptSequence { ref value } if value == "2025ABCD"
    ));
}

#[tokio::test]
async fn gr_numbers_seed_at_1000_and_widen_past_9999() {
    let db = RegistryDb::open_in_memory().await.unwrap();

    let first = next_admission_number(&db).await.unwrap();
    assert_eq!(first.as_str(), "1000");

    db.insert_registration(&record("20250001", "2025-2026", "Ayesha"))
        .await
        .unwrap();
    let admission = db
        .admit(&RegNo::new("20250001").unwrap(), "2025-04-01")
        .await
        .unwrap();
    assert_eq!(admission.gr_no.as_str(), "1000");
    assert_eq!(admission.child_name, "Ayesha");
    assert_eq!(admission.class_applied_for, "Class 1");

    let next = next_admission_number(&db).await.unwrap();
    assert_eq!(next.as_str(), "1001");

    // Numeric ordering, not string ordering, picks the maximum.
    db.insert_admission(&registry_model::Admission {
        gr_no: GrNo::new("9999").unwrap(),
        reg_no: RegNo::new("20250001").unwrap(),
        child_name: "Ayesha".to_string(),
        class_applied_for: "Class 1".to_string(),
        academic_year: AcademicYear::new("2025-2026").unwrap(),
        admitted_on: "2025-04-01".to_string(),
    })
    .await
    .unwrap();
    let widened = next_admission_number(&db).await.unwrap();
    assert_eq!(widened.as_str(), "10000");
}

#[tokio::test]
async fn admit_unknown_registration_is_not_found() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    let error = db
        .admit(&RegNo::new("20259999").unwrap(), "2025-04-01")
        .await
        .unwrap_err();
    assert!(matches!(error, StoreError::RegistrationNotFound { .. }));
}

#[tokio::test]
async fn admissions_filter_by_academic_year() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    db.insert_registration(&record("20250001", "2025-2026", "Ayesha"))
        .await
        .unwrap();
    db.insert_registration(&record("20260001", "2026-2027", "Bilal"))
        .await
        .unwrap();
    db.admit(&RegNo::new("20250001").unwrap(), "2025-04-01")
        .await
        .unwrap();
    db.admit(&RegNo::new("20260001").unwrap(), "2026-04-01")
        .await
        .unwrap();

    let all = db.list_admissions(None).await.unwrap();
    assert_eq!(all.len(), 2);
    let filtered = db.list_admissions(Some("2026-2027")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].child_name, "Bilal");
}

#[tokio::test]
async fn registration_round_trip_and_status_flag() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    db.insert_registration(&record("20250001", "2025-2026", "Ayesha"))
        .await
        .unwrap();

    let reg_no = RegNo::new("20250001").unwrap();
    let fetched = db.find_registration(&reg_no).await.unwrap();
    assert_eq!(fetched.child_name(), "Ayesha");
    assert_eq!(fetched.academic_year.as_str(), "2025-2026");
    assert!(fetched.is_active);

    db.set_registration_active(&reg_no, false).await.unwrap();
    let active = db.list_registrations(Some(true)).await.unwrap();
    assert!(active.is_empty());
    let inactive = db.list_registrations(Some(false)).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].child_name, "Ayesha");
    assert!(!inactive[0].is_active);

    let error = db
        .set_registration_active(&RegNo::new("20259999").unwrap(), true)
        .await
        .unwrap_err();
    assert!(matches!(error, StoreError::RegistrationNotFound { .. }));
}

#[tokio::test]
async fn duplicate_teacher_cnic_is_a_distinct_error() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    let ali = Teacher::new("Ali Khan", "4210112345671", true, "Math");
    db.insert_teacher(&ali).await.unwrap();

    let error = db
        .insert_teacher(&Teacher::new("Other", "4210112345671", false, ""))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        StoreError::DuplicateCnic { ref cnic } if cnic == "4210112345671"
    ));
}

#[tokio::test]
async fn teacher_lookup_by_id_then_cnic() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    let id = db
        .insert_teacher(&Teacher::new("Ali Khan", "4210112345671", false, "Math"))
        .await
        .unwrap();

    let by_id = db.find_teacher(&id.to_string()).await.unwrap();
    assert_eq!(by_id.name, "Ali Khan");
    let by_cnic = db.find_teacher("4210112345671").await.unwrap();
    assert_eq!(by_cnic.id, Some(id));

    let error = db.find_teacher("nobody").await.unwrap_err();
    assert!(matches!(error, StoreError::TeacherNotFound { .. }));
}

#[tokio::test]
async fn teacher_roles_subjects_and_class_assignments() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    let ali = db
        .insert_teacher(&Teacher::new("Ali Khan", "4210112345671", false, "Math,English"))
        .await
        .unwrap();
    let sana = db
        .insert_teacher(&Teacher::new("Sana Tariq", "4210112345672", true, "Urdu"))
        .await
        .unwrap();

    let class_teachers = db.list_class_teachers().await.unwrap();
    assert_eq!(class_teachers.len(), 1);
    assert_eq!(class_teachers[0].name, "Sana Tariq");

    db.set_class_teacher(ali, true).await.unwrap();
    assert_eq!(db.list_class_teachers().await.unwrap().len(), 2);

    let math = db.list_teachers_by_subject("Math").await.unwrap();
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].name, "Ali Khan");

    db.assign_class(&ClassAssignment {
        teacher_id: ali,
        class_name: "Class 1".to_string(),
        section: "A".to_string(),
    })
    .await
    .unwrap();
    db.assign_class(&ClassAssignment {
        teacher_id: sana,
        class_name: "Class 1".to_string(),
        section: "B".to_string(),
    })
    .await
    .unwrap();

    let whole_class = db.list_teachers_by_class("Class 1", None).await.unwrap();
    assert_eq!(whole_class.len(), 2);
    let section_b = db
        .list_teachers_by_class("Class 1", Some("B"))
        .await
        .unwrap();
    assert_eq!(section_b.len(), 1);
    assert_eq!(section_b[0].0.name, "Sana Tariq");
    assert_eq!(section_b[0].2, "B");
}

#[tokio::test]
async fn policies_upsert_and_read_back() {
    let db = RegistryDb::open_in_memory().await.unwrap();
    assert!(db.registration_policy().await.unwrap().is_none());
    assert!(db.admission_policy().await.unwrap().is_none());

    db.set_registration_policy(&RegistrationPolicy {
        fee: "500".to_string(),
    })
    .await
    .unwrap();
    db.set_registration_policy(&RegistrationPolicy {
        fee: "750".to_string(),
    })
    .await
    .unwrap();
    let registration = db.registration_policy().await.unwrap().unwrap();
    assert_eq!(registration.fee, "750");

    db.set_admission_policy(&AdmissionPolicy {
        fee: "5000".to_string(),
        security_deposit: "10000".to_string(),
    })
    .await
    .unwrap();
    let admission = db.admission_policy().await.unwrap().unwrap();
    assert_eq!(admission.security_deposit, "10000");

    let class_1 = ClassPolicy {
        class_name: "Class 1".to_string(),
        monthly_fee: "3000".to_string(),
        annual_charges: "2000".to_string(),
        other_charges: "500".to_string(),
        computer_lab_charges: "300".to_string(),
        lab_charges: "0".to_string(),
    };
    db.set_class_policy(&class_1).await.unwrap();
    db.set_class_policy(&ClassPolicy {
        monthly_fee: "3500".to_string(),
        ..class_1
    })
    .await
    .unwrap();

    let policies = db.class_policies().await.unwrap();
    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].monthly_fee, "3500");
}
