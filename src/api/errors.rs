//! Error type for the notes API

use std::fmt;
use thiserror::Error;

/// The request an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    ListNotes,
    CreateNote,
    GetNote,
    UpdateNote,
    DeleteNote,
}

impl ApiOperation {
    pub fn as_str(&self) -> &str {
        match self {
            ApiOperation::ListNotes => "fetch notes",
            ApiOperation::CreateNote => "create note",
            ApiOperation::GetNote => "fetch note",
            ApiOperation::UpdateNote => "update note",
            ApiOperation::DeleteNote => "delete note",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport failures, non-success statuses and undecodable bodies all
/// surface as the same kind of error; callers never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to {operation}: {reason}")]
    RequestFailed {
        operation: ApiOperation,
        reason: String,
    },
}

impl ApiError {
    pub fn request_failed(operation: ApiOperation, reason: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            operation,
            reason: reason.into(),
        }
    }

    pub fn operation(&self) -> ApiOperation {
        match self {
            ApiError::RequestFailed { operation, .. } => *operation,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
