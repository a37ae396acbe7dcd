//! Registration record queries.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use registry_model::{
    AcademicYear, RegNo, RegistrationRecord, RegistrationSummary, registration_form,
};

use crate::db::RegistryDb;
use crate::error::{Result, StoreError};

impl RegistryDb {
    /// Inserts a registration record, reg_no included.
    pub async fn insert_registration(&self, record: &RegistrationRecord) -> Result<()> {
        let mut columns = String::from("reg_no, academic_year, is_active");
        let mut placeholders = String::from("?, ?, ?");
        for field in registration_form() {
            columns.push_str(", ");
            columns.push_str(field.name);
            placeholders.push_str(", ?");
        }
        let sql = format!("INSERT INTO student_registration ({columns}) VALUES ({placeholders})");

        let mut query = sqlx::query(&sql)
            .bind(record.reg_no.as_str())
            .bind(record.academic_year.as_str())
            .bind(i64::from(record.is_active));
        for value in &record.values {
            query = query.bind(value);
        }
        query.execute(self.pool()).await?;
        Ok(())
    }

    /// Lists registrations, optionally filtered by the active flag.
    pub async fn list_registrations(
        &self,
        active: Option<bool>,
    ) -> Result<Vec<RegistrationSummary>> {
        let base = "SELECT reg_no, child_name, gender, child_dob, father_name, father_cnic, \
                    father_mobile1, is_active FROM student_registration";
        let rows = match active {
            Some(flag) => {
                let sql = format!("{base} WHERE is_active = ? ORDER BY reg_no");
                sqlx::query(&sql)
                    .bind(i64::from(flag))
                    .fetch_all(self.pool())
                    .await?
            }
            None => {
                let sql = format!("{base} ORDER BY reg_no");
                sqlx::query(&sql).fetch_all(self.pool()).await?
            }
        };
        rows.iter().map(summary_from_row).collect()
    }

    /// Fetches a full registration record by registration number.
    pub async fn find_registration(&self, reg_no: &RegNo) -> Result<RegistrationRecord> {
        let row = sqlx::query("SELECT * FROM student_registration WHERE reg_no = ?")
            .bind(reg_no.as_str())
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| StoreError::RegistrationNotFound {
                reg_no: reg_no.to_string(),
            })?;

        let mut values = Vec::with_capacity(registration_form().len());
        for field in registration_form() {
            values.push(row.try_get::<String, _>(field.name)?);
        }
        let mut record = RegistrationRecord::new(
            RegNo::new(row.try_get::<String, _>("reg_no")?)?,
            AcademicYear::new(row.try_get::<String, _>("academic_year")?)?,
            values,
        )?;
        record.is_active = row.try_get::<i64, _>("is_active")? != 0;
        Ok(record)
    }

    /// Flips the active flag on a registration.
    pub async fn set_registration_active(&self, reg_no: &RegNo, active: bool) -> Result<()> {
        let result = sqlx::query("UPDATE student_registration SET is_active = ? WHERE reg_no = ?")
            .bind(i64::from(active))
            .bind(reg_no.as_str())
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RegistrationNotFound {
                reg_no: reg_no.to_string(),
            });
        }
        Ok(())
    }

    /// The maximum stored registration number starting with `prefix`, if
    /// any. Registration numbers share a zero-padded width within a year,
    /// so the string maximum is the numeric maximum.
    pub async fn max_reg_no_with_prefix(&self, prefix: &str) -> Result<Option<String>> {
        let pattern = format!("{prefix}%");
        let max: Option<String> =
            sqlx::query_scalar("SELECT MAX(reg_no) FROM student_registration WHERE reg_no LIKE ?")
                .bind(&pattern)
                .fetch_one(self.pool())
                .await?;
        Ok(max)
    }
}

fn summary_from_row(row: &SqliteRow) -> Result<RegistrationSummary> {
    Ok(RegistrationSummary {
        reg_no: row.try_get("reg_no")?,
        child_name: row.try_get("child_name")?,
        gender: row.try_get("gender")?,
        child_dob: row.try_get("child_dob")?,
        father_name: row.try_get("father_name")?,
        father_cnic: row.try_get("father_cnic")?,
        father_mobile: row.try_get("father_mobile1")?,
        is_active: row.try_get::<i64, _>("is_active")? != 0,
    })
}
