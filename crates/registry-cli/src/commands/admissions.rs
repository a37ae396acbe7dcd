//! `admit` and `admissions` subcommands.

use anyhow::Result;
use tracing::info;

use registry_model::RegNo;
use registry_store::RegistryDb;

use crate::cli::{AdmissionsCommand, AdmitArgs};
use crate::summary;

pub async fn run_admit(db: &RegistryDb, args: &AdmitArgs) -> Result<i32> {
    let reg_no = RegNo::new(args.reg_no.clone())?;
    let today = chrono::Local::now().date_naive().to_string();
    let admission = db.admit(&reg_no, &today).await?;
    info!(gr_no = %admission.gr_no, reg_no = %reg_no, "student admitted");
    println!(
        "Admitted {} with GR number {}",
        admission.child_name, admission.gr_no
    );
    Ok(0)
}

pub async fn run(db: &RegistryDb, command: &AdmissionsCommand) -> Result<i32> {
    match command {
        AdmissionsCommand::List(args) => {
            let admissions = db.list_admissions(args.year.as_deref()).await?;
            summary::print_admissions(&admissions);
            Ok(0)
        }
    }
}
