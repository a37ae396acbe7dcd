use serde::{Deserialize, Serialize};

/// A teacher roster entry.
///
/// `cnic` is stored normalized to 13 digits and is unique in storage.
/// `subjects` keeps the original comma-separated free-text convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Database row id; `None` until inserted.
    pub id: Option<i64>,
    pub name: String,
    pub cnic: String,
    pub is_class_teacher: bool,
    pub subjects: String,
}

impl Teacher {
    pub fn new(
        name: impl Into<String>,
        cnic: impl Into<String>,
        is_class_teacher: bool,
        subjects: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            cnic: cnic.into(),
            is_class_teacher,
            subjects: subjects.into(),
        }
    }
}

/// A class/section assignment for a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub teacher_id: i64,
    pub class_name: String,
    pub section: String,
}
