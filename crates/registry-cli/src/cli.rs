//! CLI argument definitions for the school registry.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "school-registry",
    version,
    about = "School Registry - student registrations, admissions, teachers, and fee policies",
    long_about = "Record student registrations, admit students to the General Register,\n\
                  manage the teacher roster and class assignments, and maintain fee\n\
                  policies. Records persist in a local SQLite database."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the registry database file.
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = "school-registry.db",
        global = true
    )]
    pub database: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Student registration records.
    #[command(subcommand)]
    Register(RegisterCommand),

    /// Admit a registered student to the General Register.
    Admit(AdmitArgs),

    /// Admitted students.
    #[command(subcommand)]
    Admissions(AdmissionsCommand),

    /// Teacher roster, roles, and class assignments.
    #[command(subcommand)]
    Teacher(TeacherCommand),

    /// Fee policies.
    #[command(subcommand)]
    Policy(PolicyCommand),

    /// Registration form reference.
    #[command(subcommand)]
    Form(FormCommand),
}

#[derive(Subcommand)]
pub enum RegisterCommand {
    /// Register one student interactively (prompts for all 62 form fields).
    Add(RegisterAddArgs),

    /// Register students in bulk from a registration CSV export.
    Import(RegisterImportArgs),

    /// List registered students.
    List(RegisterListArgs),

    /// Mark a registration active or inactive.
    SetStatus(SetStatusArgs),
}

#[derive(Args)]
pub struct RegisterAddArgs {
    /// Academic year the registration belongs to, e.g. 2025-2026.
    #[arg(long = "academic-year", value_name = "YEAR")]
    pub academic_year: String,
}

#[derive(Args)]
pub struct RegisterImportArgs {
    /// Registration CSV export (row 1 sample, row 2 header, data from row 3).
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Academic year the registrations belong to, e.g. 2025-2026.
    #[arg(long = "academic-year", value_name = "YEAR")]
    pub academic_year: String,
}

#[derive(Args)]
pub struct RegisterListArgs {
    /// Show only inactive registrations.
    #[arg(long = "inactive")]
    pub inactive: bool,
}

#[derive(Args)]
pub struct SetStatusArgs {
    /// Registration number to update.
    #[arg(long = "reg-no", value_name = "NO")]
    pub reg_no: String,

    /// New status.
    #[arg(long = "status", value_enum)]
    pub status: StatusArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
}

#[derive(Args)]
pub struct AdmitArgs {
    /// Registration number of the student to admit.
    #[arg(long = "reg-no", value_name = "NO")]
    pub reg_no: String,
}

#[derive(Subcommand)]
pub enum AdmissionsCommand {
    /// List admitted students.
    List(AdmissionsListArgs),
}

#[derive(Args)]
pub struct AdmissionsListArgs {
    /// Show only admissions for this academic year, e.g. 2025-2026.
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<String>,
}

#[derive(Subcommand)]
pub enum TeacherCommand {
    /// Add one teacher to the roster.
    Add(TeacherAddArgs),

    /// Add teachers in bulk from a roster CSV.
    Import(TeacherImportArgs),

    /// List teachers.
    List(TeacherListArgs),

    /// Assign the class-teacher or subject-teacher role.
    SetRole(SetRoleArgs),

    /// Assign a class and section to a teacher.
    AssignClass(AssignClassArgs),
}

#[derive(Args)]
pub struct TeacherAddArgs {
    /// Teacher name.
    #[arg(long = "name")]
    pub name: String,

    /// CNIC (13 digits, dashes optional).
    #[arg(long = "cnic")]
    pub cnic: String,

    /// Mark as a class teacher (class teachers are also subject teachers).
    #[arg(long = "class-teacher")]
    pub class_teacher: bool,

    /// Comma-separated subjects.
    #[arg(long = "subjects", default_value = "")]
    pub subjects: String,
}

#[derive(Args)]
pub struct TeacherImportArgs {
    /// Roster CSV: Name, CNIC, IsClassTeacher (Y/N), Subjects.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Args)]
pub struct TeacherListArgs {
    /// Show only class teachers.
    #[arg(long = "class-teachers", conflicts_with_all = ["subject", "class"])]
    pub class_teachers: bool,

    /// Show teachers of a subject (substring match).
    #[arg(long = "subject", value_name = "SUBJECT", conflicts_with = "class")]
    pub subject: Option<String>,

    /// Show teachers assigned to a class.
    #[arg(long = "class", value_name = "CLASS")]
    pub class: Option<String>,

    /// Narrow the class listing to one section.
    #[arg(long = "section", value_name = "SECTION", requires = "class")]
    pub section: Option<String>,
}

#[derive(Args)]
pub struct SetRoleArgs {
    /// Teacher id or CNIC.
    #[arg(long = "teacher", value_name = "ID-OR-CNIC")]
    pub teacher: String,

    /// Role to assign.
    #[arg(long = "role", value_enum)]
    pub role: RoleArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoleArg {
    /// Class teacher (also teaches subjects).
    Class,
    /// Subject teacher only.
    Subject,
}

#[derive(Args)]
pub struct AssignClassArgs {
    /// Teacher id or CNIC.
    #[arg(long = "teacher", value_name = "ID-OR-CNIC")]
    pub teacher: String,

    /// Class name, e.g. "Class 1".
    #[arg(long = "class", value_name = "CLASS")]
    pub class: String,

    /// Section, e.g. "A".
    #[arg(long = "section", value_name = "SECTION")]
    pub section: String,
}

#[derive(Subcommand)]
pub enum PolicyCommand {
    /// Set the registration fee policy.
    SetRegistration(SetRegistrationPolicyArgs),

    /// Set the admission fee policy.
    SetAdmission(SetAdmissionPolicyArgs),

    /// Set the class-wise general fee policy.
    SetClass(SetClassPolicyArgs),

    /// Show all stored fee policies.
    Show,
}

#[derive(Args)]
pub struct SetRegistrationPolicyArgs {
    /// Registration fee.
    #[arg(long = "fee")]
    pub fee: String,
}

#[derive(Args)]
pub struct SetAdmissionPolicyArgs {
    /// Admission fee.
    #[arg(long = "fee")]
    pub fee: String,

    /// Security deposit.
    #[arg(long = "security-deposit")]
    pub security_deposit: String,
}

#[derive(Args)]
pub struct SetClassPolicyArgs {
    /// Class name, e.g. "Class 1".
    #[arg(long = "class", value_name = "CLASS")]
    pub class: String,

    /// Monthly fee.
    #[arg(long = "monthly-fee")]
    pub monthly_fee: String,

    /// Annual charges (charged once a year).
    #[arg(long = "annual-charges", default_value = "")]
    pub annual_charges: String,

    /// Other annual charges (charged once a year).
    #[arg(long = "other-charges", default_value = "")]
    pub other_charges: String,

    /// Monthly computer lab charges.
    #[arg(long = "computer-lab-charges", default_value = "")]
    pub computer_lab_charges: String,

    /// Monthly lab charges.
    #[arg(long = "lab-charges", default_value = "")]
    pub lab_charges: String,
}

#[derive(Subcommand)]
pub enum FormCommand {
    /// List the 62 registration form columns and how each is normalized.
    Fields,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

