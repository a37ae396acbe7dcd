//! `register` subcommands: manual entry, bulk import, listing, status.

use anyhow::{Result, bail};
use tracing::info;

use registry_ingest::{RowFailure, read_registration_csv};
use registry_model::{AcademicYear, CHILD_NAME, RegNo, RegistrationRecord};
use registry_store::{RegistryDb, next_registration_number};

use crate::cli::{
    RegisterAddArgs, RegisterCommand, RegisterImportArgs, RegisterListArgs, SetStatusArgs,
    StatusArg,
};
use crate::prompts::collect_registration_form;
use crate::summary;

pub async fn run(db: &RegistryDb, command: RegisterCommand) -> Result<i32> {
    match command {
        RegisterCommand::Add(args) => add(db, &args).await,
        RegisterCommand::Import(args) => import(db, &args).await,
        RegisterCommand::List(args) => list(db, &args).await,
        RegisterCommand::SetStatus(args) => set_status(db, &args).await,
    }
}

async fn add(db: &RegistryDb, args: &RegisterAddArgs) -> Result<i32> {
    let academic_year = AcademicYear::new(args.academic_year.clone())?;
    let Some(values) = collect_registration_form()? else {
        println!("Cancelled.");
        return Ok(0);
    };
    if values[CHILD_NAME].is_empty() {
        bail!("child name is required (col D)");
    }
    let reg_no = next_registration_number(db, &academic_year).await?;
    let record = RegistrationRecord::new(reg_no.clone(), academic_year, values)?;
    db.insert_registration(&record).await?;
    info!(reg_no = %reg_no, "registration inserted");
    println!(
        "Registered {} with registration number {reg_no}",
        record.child_name()
    );
    Ok(0)
}

async fn import(db: &RegistryDb, args: &RegisterImportArgs) -> Result<i32> {
    let academic_year = AcademicYear::new(args.academic_year.clone())?;
    let import = read_registration_csv(&args.csv)?;
    let mut successes = Vec::new();
    let mut failures = import.failures;
    for parsed in import.rows {
        let row_number = parsed.row_number;
        let reg_no = next_registration_number(db, &academic_year).await?;
        let record =
            RegistrationRecord::new(reg_no.clone(), academic_year.clone(), parsed.values)?;
        match db.insert_registration(&record).await {
            Ok(()) => {
                successes.push((row_number, record.child_name().to_string(), reg_no.to_string()));
            }
            Err(error) => failures.push(RowFailure::new(
                row_number,
                record.child_name(),
                format!("insert failed: {error}"),
            )),
        }
    }
    failures.sort_by_key(|failure| failure.row_number);
    summary::print_import_summary("Registration", &successes, &failures);
    Ok(if failures.is_empty() { 0 } else { 1 })
}

async fn list(db: &RegistryDb, args: &RegisterListArgs) -> Result<i32> {
    let filter = if args.inactive { Some(false) } else { None };
    let registrations = db.list_registrations(filter).await?;
    summary::print_registrations(&registrations);
    Ok(0)
}

async fn set_status(db: &RegistryDb, args: &SetStatusArgs) -> Result<i32> {
    let reg_no = RegNo::new(args.reg_no.clone())?;
    let active = matches!(args.status, StatusArg::Active);
    db.set_registration_active(&reg_no, active).await?;
    println!(
        "Registration {reg_no} is now {}",
        if active { "active" } else { "inactive" }
    );
    Ok(0)
}
