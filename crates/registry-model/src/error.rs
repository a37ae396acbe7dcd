use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid registration number: {0:?}")]
    InvalidRegNo(String),
    #[error("invalid admission (GR) number: {0:?}")]
    InvalidGrNo(String),
    #[error("invalid academic year: {0:?}")]
    InvalidAcademicYear(String),
    #[error("registration form row has {found} values, expected {expected}")]
    FieldCountMismatch { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
