use std::path::PathBuf;

/// How a backend command settled, as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// 2xx with the server's message.
    Accepted { message: String },
    /// Non-2xx with the server's error text.
    Rejected { status: u16, error: String },
    /// Transport or decode failure; no usable reply.
    Failed { reason: String },
}

/// Contents of the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadForm {
    pub file: Option<PathBuf>,
}

impl UploadForm {
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    pub fn reset(&mut self) {
        self.file = None;
    }
}
