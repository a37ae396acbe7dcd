use serde::{Deserialize, Serialize};

use crate::ids::{AcademicYear, GrNo, RegNo};

/// An admitted student: the registration record promoted into the General
/// Register once the admission went through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admission {
    pub gr_no: GrNo,
    pub reg_no: RegNo,
    pub child_name: String,
    pub class_applied_for: String,
    pub academic_year: AcademicYear,
    /// ISO date (`YYYY-MM-DD`) the admission was recorded.
    pub admitted_on: String,
}
