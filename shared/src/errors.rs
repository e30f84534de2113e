//! Shared error types for the pairing system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown cohort token: {input}")]
    UnknownCohort { input: String },

    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
