//! Command handlers.

mod admissions;
mod form;
mod policy;
mod register;
mod teachers;

use anyhow::Result;

use registry_store::RegistryDb;

use crate::cli::{Cli, Command};

/// Runs the parsed command, returning the process exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        // Form reference needs no database.
        Command::Form(command) => form::run(&command),
        command => {
            let db = RegistryDb::open(&cli.database).await?;
            dispatch(&db, command).await
        }
    }
}

async fn dispatch(db: &RegistryDb, command: Command) -> Result<i32> {
    match command {
        Command::Register(command) => register::run(db, command).await,
        Command::Admit(args) => admissions::run_admit(db, &args).await,
        Command::Admissions(command) => admissions::run(db, &command).await,
        Command::Teacher(command) => teachers::run(db, command).await,
        Command::Policy(command) => policy::run(db, command).await,
        Command::Form(command) => form::run(&command),
    }
}
