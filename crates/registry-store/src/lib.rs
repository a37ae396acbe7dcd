//! SQLite persistence for the school registry.
//!
//! [`RegistryDb`] owns the connection pool and exposes typed queries for
//! each collection (registrations, admissions, teachers, fee policies).
//! [`sequence`] derives the next registration and General Register numbers
//! from the stored maxima.

mod admissions;
mod db;
mod error;
mod policies;
mod registrations;
pub mod sequence;
mod teachers;

pub use db::RegistryDb;
pub use error::{Result, StoreError};
pub use sequence::{next_admission_number, next_registration_number};
