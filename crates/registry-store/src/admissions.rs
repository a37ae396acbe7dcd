//! Admission (General Register) queries.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use registry_model::{AcademicYear, Admission, GrNo, RegNo};

use crate::db::RegistryDb;
use crate::error::Result;
use crate::sequence::next_admission_number;

impl RegistryDb {
    pub async fn insert_admission(&self, admission: &Admission) -> Result<()> {
        sqlx::query(
            "INSERT INTO student_admitted \
             (gr_no, reg_no, child_name, class_applied_for, academic_year, admitted_on) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(admission.gr_no.as_str())
        .bind(admission.reg_no.as_str())
        .bind(&admission.child_name)
        .bind(&admission.class_applied_for)
        .bind(admission.academic_year.as_str())
        .bind(&admission.admitted_on)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Lists admissions, optionally filtered by academic year.
    pub async fn list_admissions(&self, academic_year: Option<&str>) -> Result<Vec<Admission>> {
        let base = "SELECT gr_no, reg_no, child_name, class_applied_for, academic_year, \
                    admitted_on FROM student_admitted";
        let rows = match academic_year {
            Some(year) => {
                let sql = format!("{base} WHERE academic_year = ? ORDER BY gr_no");
                sqlx::query(&sql).bind(year).fetch_all(self.pool()).await?
            }
            None => {
                let sql = format!("{base} ORDER BY gr_no");
                sqlx::query(&sql).fetch_all(self.pool()).await?
            }
        };
        rows.iter().map(admission_from_row).collect()
    }

    /// The numerically largest stored GR number, if any. Returned as the
    /// stored text so the caller decides what a non-numeric value means.
    pub async fn max_gr_no(&self) -> Result<Option<String>> {
        let max: Option<String> = sqlx::query_scalar(
            "SELECT gr_no FROM student_admitted \
             ORDER BY CAST(gr_no AS INTEGER) DESC LIMIT 1",
        )
        .fetch_optional(self.pool())
        .await?;
        Ok(max)
    }

    /// Admits a registered student: allocates the next GR number, copies
    /// the identity fields from the registration, and records the
    /// admission.
    pub async fn admit(&self, reg_no: &RegNo, admitted_on: &str) -> Result<Admission> {
        let record = self.find_registration(reg_no).await?;
        let gr_no = next_admission_number(self).await?;
        let admission = Admission {
            gr_no,
            reg_no: record.reg_no.clone(),
            child_name: record.child_name().to_string(),
            class_applied_for: record
                .value("class_applied_for")
                .unwrap_or_default()
                .to_string(),
            academic_year: record.academic_year.clone(),
            admitted_on: admitted_on.to_string(),
        };
        self.insert_admission(&admission).await?;
        Ok(admission)
    }
}

fn admission_from_row(row: &SqliteRow) -> Result<Admission> {
    Ok(Admission {
        gr_no: GrNo::new(row.try_get::<String, _>("gr_no")?)?,
        reg_no: RegNo::new(row.try_get::<String, _>("reg_no")?)?,
        child_name: row.try_get("child_name")?,
        class_applied_for: row.try_get("class_applied_for")?,
        academic_year: AcademicYear::new(row.try_get::<String, _>("academic_year")?)?,
        admitted_on: row.try_get("admitted_on")?,
    })
}
