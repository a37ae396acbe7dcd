use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing header row")]
    MissingHeader,
    #[error("header row has {found} columns, expected at least {expected}")]
    HeaderTooNarrow { found: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
