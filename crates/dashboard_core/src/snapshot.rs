use std::collections::BTreeMap;
use std::fmt;

/// Server-assigned opaque job identifier.
pub type JobId = String;

/// One full status payload. Superseded wholesale by the next accepted one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub results: Vec<ResultEntry>,
    /// Keyed by job id; iteration follows key order, which is also the order
    /// the backend serialises them in.
    pub processing: BTreeMap<JobId, ProcessingEntry>,
}

impl StatusSnapshot {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.processing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub file: String,
    pub status: ResultStatus,
    pub summary_file: Option<String>,
    pub message: Option<String>,
}

impl ResultEntry {
    pub fn completed(file: impl Into<String>, summary_file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            status: ResultStatus::Completed,
            summary_file: Some(summary_file.into()),
            message: None,
        }
    }
}

/// Terminal state of a finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultStatus {
    Completed,
    Duplicate,
    Error,
    Other(String),
}

impl ResultStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => ResultStatus::Completed,
            "duplicate" => ResultStatus::Duplicate,
            "error" => ResultStatus::Error,
            other => ResultStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResultStatus::Completed => "completed",
            ResultStatus::Duplicate => "duplicate",
            ResultStatus::Error => "error",
            ResultStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job mid-execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessingEntry {
    pub file: Option<String>,
    pub stage: String,
    /// Percent complete as reported by the server (0-100).
    pub progress: u32,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl ProcessingEntry {
    pub fn new(file: Option<&str>, stage: impl Into<String>, progress: u32) -> Self {
        Self {
            file: file.map(ToOwned::to_owned),
            stage: stage.into(),
            progress,
            status: None,
            error: None,
        }
    }

    /// Display label: the file name, or the job id when the name is missing or empty.
    pub fn label<'a>(&'a self, job_id: &'a str) -> &'a str {
        self.file
            .as_deref()
            .filter(|file| !file.is_empty())
            .unwrap_or(job_id)
    }
}
