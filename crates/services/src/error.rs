//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::{ExamName, FlowError, SessionError};
use storage::repository::StorageError;

/// Errors emitted by `ExamService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error("exam {0} not found")]
    NotFound(ExamName),
    #[error("exam {0} has no pages")]
    NoPages(ExamName),
    #[error(transparent)]
    Flow(FlowError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionError> for ExamServiceError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoPages { name } => ExamServiceError::NoPages(name),
            other => ExamServiceError::Flow(FlowError::Session(other)),
        }
    }
}

impl From<FlowError> for ExamServiceError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Session(session) => session.into(),
            other => ExamServiceError::Flow(other),
        }
    }
}
