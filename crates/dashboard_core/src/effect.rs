use std::time::Duration;

use crate::{NotificationId, UploadForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchStatus { seq: u64 },
    Upload { form: UploadForm },
    StartMonitoring { folder: String },
    StopMonitoring,
    ScheduleDismissal { id: NotificationId, after: Duration },
}
