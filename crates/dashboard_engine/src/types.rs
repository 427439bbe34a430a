use std::fmt;
use std::path::PathBuf;

use crate::StatusPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Io => write!(f, "io error"),
        }
    }
}

/// A command response that arrived and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Accepted { status: u16, message: String },
    Rejected { status: u16, error: String },
}

/// Multipart upload request. Without a file the form goes out empty and the
/// backend decides what to say about it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadRequest {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StatusFetched {
        seq: u64,
        result: Result<StatusPayload, ApiError>,
    },
    UploadCompleted(Result<CommandReply, ApiError>),
    StartCompleted(Result<CommandReply, ApiError>),
    StopCompleted(Result<CommandReply, ApiError>),
}
