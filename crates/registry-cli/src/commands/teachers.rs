//! `teacher` subcommands: roster entry, import, listing, roles, classes.

use anyhow::{Context, Result, bail};
use tracing::info;

use registry_ingest::{RowFailure, read_teacher_roster};
use registry_model::{ClassAssignment, Teacher};
use registry_normalize::normalize_national_id;
use registry_store::{RegistryDb, StoreError};

use crate::cli::{
    AssignClassArgs, RoleArg, SetRoleArgs, TeacherAddArgs, TeacherCommand, TeacherImportArgs,
    TeacherListArgs,
};
use crate::summary;

pub async fn run(db: &RegistryDb, command: TeacherCommand) -> Result<i32> {
    match command {
        TeacherCommand::Add(args) => add(db, &args).await,
        TeacherCommand::Import(args) => import(db, &args).await,
        TeacherCommand::List(args) => list(db, &args).await,
        TeacherCommand::SetRole(args) => set_role(db, &args).await,
        TeacherCommand::AssignClass(args) => assign_class(db, &args).await,
    }
}

async fn add(db: &RegistryDb, args: &TeacherAddArgs) -> Result<i32> {
    if args.name.trim().is_empty() {
        bail!("teacher name cannot be empty");
    }
    let cnic = normalize_national_id(args.cnic.trim());
    if !cnic.is_canonical() {
        bail!("invalid CNIC {:?}: expected 13 digits", args.cnic);
    }
    let teacher = Teacher::new(
        args.name.trim(),
        cnic.into_value(),
        args.class_teacher,
        args.subjects.trim(),
    );
    let id = db.insert_teacher(&teacher).await?;
    info!(id, "teacher added");
    println!("Added teacher {} with id {id}", teacher.name);
    Ok(0)
}

async fn import(db: &RegistryDb, args: &TeacherImportArgs) -> Result<i32> {
    let import = read_teacher_roster(&args.csv)?;
    let mut successes = Vec::new();
    let mut failures = import.failures;
    for (row_number, teacher) in import.teachers {
        match db.insert_teacher(&teacher).await {
            Ok(id) => successes.push((row_number, teacher.name, format!("id {id}"))),
            Err(StoreError::DuplicateCnic { cnic }) => failures.push(RowFailure::new(
                row_number,
                &teacher.name,
                format!("duplicate CNIC {cnic}"),
            )),
            Err(error) => return Err(error.into()),
        }
    }
    failures.sort_by_key(|failure| failure.row_number);
    summary::print_import_summary("Teacher", &successes, &failures);
    Ok(if failures.is_empty() { 0 } else { 1 })
}

async fn list(db: &RegistryDb, args: &TeacherListArgs) -> Result<i32> {
    if let Some(class) = &args.class {
        let rows = db
            .list_teachers_by_class(class, args.section.as_deref())
            .await?;
        summary::print_teachers_with_classes(&rows);
        return Ok(0);
    }
    let teachers = if args.class_teachers {
        db.list_class_teachers().await?
    } else if let Some(subject) = &args.subject {
        db.list_teachers_by_subject(subject).await?
    } else {
        db.list_teachers().await?
    };
    summary::print_teachers(&teachers);
    Ok(0)
}

async fn set_role(db: &RegistryDb, args: &SetRoleArgs) -> Result<i32> {
    let teacher = db.find_teacher(&args.teacher).await?;
    let id = teacher.id.context("teacher row has no id")?;
    let is_class_teacher = matches!(args.role, RoleArg::Class);
    db.set_class_teacher(id, is_class_teacher).await?;
    println!(
        "{} is now a {} teacher",
        teacher.name,
        if is_class_teacher { "class" } else { "subject" }
    );
    Ok(0)
}

async fn assign_class(db: &RegistryDb, args: &AssignClassArgs) -> Result<i32> {
    if args.class.trim().is_empty() {
        bail!("class name cannot be empty");
    }
    if args.section.trim().is_empty() {
        bail!("section cannot be empty");
    }
    let teacher = db.find_teacher(&args.teacher).await?;
    let teacher_id = teacher.id.context("teacher row has no id")?;
    db.assign_class(&ClassAssignment {
        teacher_id,
        class_name: args.class.trim().to_string(),
        section: args.section.trim().to_string(),
    })
    .await?;
    println!(
        "Assigned {} section {} to {}",
        args.class.trim(),
        args.section.trim(),
        teacher.name
    );
    Ok(0)
}
