pub mod error;
pub mod registration;
pub mod report;
pub mod roster;

pub use error::{IngestError, Result};
pub use registration::{ParsedRegistration, RegistrationImport, read_registration_csv};
pub use report::RowFailure;
pub use roster::{RosterImport, read_teacher_roster};
