//! Teacher roster queries.

use sqlx::Row;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;

use registry_model::{ClassAssignment, Teacher};

use crate::db::RegistryDb;
use crate::error::{Result, StoreError};

impl RegistryDb {
    /// Inserts a teacher, returning the assigned row id.
    ///
    /// A CNIC already on the roster is a [`StoreError::DuplicateCnic`],
    /// distinct from other database failures so bulk imports can report
    /// it per row.
    pub async fn insert_teacher(&self, teacher: &Teacher) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO teachers (name, cnic, is_class_teacher, subjects) VALUES (?, ?, ?, ?)",
        )
        .bind(&teacher.name)
        .bind(&teacher.cnic)
        .bind(i64::from(teacher.is_class_teacher))
        .bind(&teacher.subjects)
        .execute(self.pool())
        .await;
        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db)) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
                Err(StoreError::DuplicateCnic {
                    cnic: teacher.cnic.clone(),
                })
            }
            Err(error) => Err(error.into()),
        }
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        let rows = sqlx::query(
            "SELECT id, name, cnic, is_class_teacher, subjects FROM teachers ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(teacher_from_row).collect()
    }

    pub async fn list_class_teachers(&self) -> Result<Vec<Teacher>> {
        let rows = sqlx::query(
            "SELECT id, name, cnic, is_class_teacher, subjects FROM teachers \
             WHERE is_class_teacher = 1 ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(teacher_from_row).collect()
    }

    /// Teachers whose subjects contain `subject` (substring match, the
    /// roster keeps subjects as comma-separated free text).
    pub async fn list_teachers_by_subject(&self, subject: &str) -> Result<Vec<Teacher>> {
        let pattern = format!("%{subject}%");
        let rows = sqlx::query(
            "SELECT id, name, cnic, is_class_teacher, subjects FROM teachers \
             WHERE subjects LIKE ? ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(teacher_from_row).collect()
    }

    /// Teachers assigned to a class, optionally narrowed to a section.
    /// Each hit carries the matching class name and section.
    pub async fn list_teachers_by_class(
        &self,
        class_name: &str,
        section: Option<&str>,
    ) -> Result<Vec<(Teacher, String, String)>> {
        let base = "SELECT t.id, t.name, t.cnic, t.is_class_teacher, t.subjects, \
                    tc.class_name, tc.section \
                    FROM teachers t JOIN teacher_classes tc ON t.id = tc.teacher_id";
        let rows = match section {
            Some(section) => {
                let sql = format!("{base} WHERE tc.class_name = ? AND tc.section = ? ORDER BY t.id");
                sqlx::query(&sql)
                    .bind(class_name)
                    .bind(section)
                    .fetch_all(self.pool())
                    .await?
            }
            None => {
                let sql = format!("{base} WHERE tc.class_name = ? ORDER BY t.id");
                sqlx::query(&sql)
                    .bind(class_name)
                    .fetch_all(self.pool())
                    .await?
            }
        };
        rows.iter()
            .map(|row| {
                let teacher = teacher_from_row(row)?;
                let class_name: String = row.try_get("class_name")?;
                let section: String = row.try_get("section")?;
                Ok((teacher, class_name, section))
            })
            .collect()
    }

    /// Finds a teacher by numeric id or, failing that, by CNIC — the same
    /// two-step lookup operators use at the console.
    pub async fn find_teacher(&self, key: &str) -> Result<Teacher> {
        if let Ok(id) = key.trim().parse::<i64>() {
            let row = sqlx::query(
                "SELECT id, name, cnic, is_class_teacher, subjects FROM teachers WHERE id = ?",
            )
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
            if let Some(row) = row {
                return teacher_from_row(&row);
            }
        }
        let row = sqlx::query(
            "SELECT id, name, cnic, is_class_teacher, subjects FROM teachers WHERE cnic = ?",
        )
        .bind(key.trim())
        .fetch_optional(self.pool())
        .await?;
        match row {
            Some(row) => teacher_from_row(&row),
            None => Err(StoreError::TeacherNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Sets the class-teacher role. Class teachers are also subject
    /// teachers, so this flag is the whole role model.
    pub async fn set_class_teacher(&self, teacher_id: i64, is_class_teacher: bool) -> Result<()> {
        let result = sqlx::query("UPDATE teachers SET is_class_teacher = ? WHERE id = ?")
            .bind(i64::from(is_class_teacher))
            .bind(teacher_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::TeacherNotFound {
                key: teacher_id.to_string(),
            });
        }
        Ok(())
    }

    pub async fn assign_class(&self, assignment: &ClassAssignment) -> Result<()> {
        sqlx::query("INSERT INTO teacher_classes (teacher_id, class_name, section) VALUES (?, ?, ?)")
            .bind(assignment.teacher_id)
            .bind(&assignment.class_name)
            .bind(&assignment.section)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}

fn teacher_from_row(row: &SqliteRow) -> Result<Teacher> {
    Ok(Teacher {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        cnic: row.try_get("cnic")?,
        is_class_teacher: row.try_get::<i64, _>("is_class_teacher")? != 0,
        subjects: row.try_get("subjects")?,
    })
}
