//! JSON shapes exchanged with the backend. Unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusPayload {
    #[serde(default)]
    pub results: Vec<ResultRecord>,
    #[serde(default)]
    pub processing: BTreeMap<String, ProcessingRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultRecord {
    pub file: String,
    pub status: String,
    #[serde(default)]
    pub summary_file: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessingRecord {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of every command response: `{message}` on success, `{error}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StartBody<'a> {
    pub folder: &'a str,
}
