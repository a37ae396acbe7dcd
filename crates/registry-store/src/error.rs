use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("a teacher with CNIC {cnic} already exists")]
    DuplicateCnic { cnic: String },
    #[error("no registration found for {reg_no}")]
    RegistrationNotFound { reg_no: String },
    #[error("no teacher found for {key:?}")]
    TeacherNotFound { key: String },
    /// Stored sequence state that cannot be parsed as a number. Reported
    /// distinctly from the fresh-scope case so operators can tell
    /// corruption apart from an empty collection.
    #[error("stored identifier {value:?} is not numeric; cannot allocate the next number")]
    CorruptSequence { value: String },
    #[error(transparent)]
    Model(#[from] registry_model::ModelError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
