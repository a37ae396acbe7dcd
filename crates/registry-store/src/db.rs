//! Database connection and schema initialization.

use std::path::Path;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use registry_model::registration_form;

use crate::error::Result;

/// Handle to the registry database.
///
/// All queries go through this type; connections come from a single-entry
/// pool because the tool is a single-user console program.
#[derive(Debug, Clone)]
pub struct RegistryDb {
    pool: SqlitePool,
}

impl RegistryDb {
    /// Opens (creating if needed) the database file and ensures the schema
    /// exists.
    pub async fn open(db_path: &Path) -> Result<Self> {
        let newly_created = !db_path.exists();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&db_url)
            .await?;

        if newly_created {
            info!("initialized new database: {}", db_path.display());
        } else {
            info!("opened existing database: {}", db_path.display());
        }

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Opens a fresh in-memory database. Used by tests.
    pub async fn open_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&self.pool)
            .await?;
        sqlx::query("PRAGMA busy_timeout = 5000")
            .execute(&self.pool)
            .await?;

        self.create_student_registration_table().await?;
        self.create_student_admitted_table().await?;
        self.create_teachers_table().await?;
        self.create_teacher_classes_table().await?;
        self.create_policy_tables().await?;
        Ok(())
    }

    async fn create_student_registration_table(&self) -> Result<()> {
        // The 62 form columns come from the schema so the table definition
        // can never drift from ingestion.
        let mut ddl = String::from(
            "CREATE TABLE IF NOT EXISTS student_registration (
                reg_no TEXT PRIMARY KEY,
                academic_year TEXT NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1",
        );
        for field in registration_form() {
            ddl.push_str(",\n                ");
            ddl.push_str(field.name);
            ddl.push_str(" TEXT NOT NULL DEFAULT ''");
        }
        ddl.push_str("\n            )");
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    async fn create_student_admitted_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS student_admitted (
                gr_no TEXT PRIMARY KEY,
                reg_no TEXT NOT NULL,
                child_name TEXT NOT NULL,
                class_applied_for TEXT NOT NULL DEFAULT '',
                academic_year TEXT NOT NULL,
                admitted_on TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn create_teachers_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS teachers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                cnic TEXT NOT NULL UNIQUE,
                is_class_teacher INTEGER NOT NULL DEFAULT 0,
                subjects TEXT NOT NULL DEFAULT ''
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn create_teacher_classes_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS teacher_classes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                teacher_id INTEGER NOT NULL REFERENCES teachers(id),
                class_name TEXT NOT NULL,
                section TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn create_policy_tables(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS registration_policy (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                fee TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS admission_policy (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                fee TEXT NOT NULL,
                security_deposit TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS class_policies (
                class_name TEXT PRIMARY KEY,
                monthly_fee TEXT NOT NULL,
                annual_charges TEXT NOT NULL,
                other_charges TEXT NOT NULL,
                computer_lab_charges TEXT NOT NULL,
                lab_charges TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
