//! Engine-specific error types

use shared::{Cohort, StudentId};
use thiserror::Error;

/// Rejection reasons for a manual pairing request.
///
/// These are ordinary outcomes, not failures: the engine rejects the request
/// closed, with no partial mutation, and the caller surfaces the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No student with id {id}")]
    UnknownStudent { id: StudentId },

    #[error("Student {id} is not available to receive a godparent")]
    GodchildUnavailable { id: StudentId },

    #[error("Student {id} already has a godchild")]
    GodparentTaken { id: StudentId },

    #[error("Cohort {godparent} does not godparent cohort {godchild}")]
    IncompatibleCohorts { godparent: Cohort, godchild: Cohort },
}

pub type EngineResult<T> = Result<T, EngineError>;
