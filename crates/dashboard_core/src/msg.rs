use std::path::PathBuf;
use std::time::Instant;

use crate::{CommandOutcome, NotificationId, StatusSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Startup; switches polling on.
    PageLoaded,
    /// Fixed-interval poll timer fired.
    PollTick,
    /// A status request completed and decoded.
    StatusReceived { seq: u64, snapshot: StatusSnapshot },
    /// User picked (or cleared) the file in the upload form.
    UploadFileSelected(Option<PathBuf>),
    /// User submitted the upload form.
    UploadSubmitted,
    UploadFinished(CommandOutcome),
    /// User edited the folder path input.
    FolderInputChanged(String),
    /// User clicked Start Monitoring.
    StartClicked,
    StartFinished(CommandOutcome),
    /// User clicked Stop Monitoring.
    StopClicked,
    StopFinished(CommandOutcome),
    /// Monitoring status learned outside the start/stop commands.
    MonitoringStatusChanged { active: bool, folder: String },
    /// User closed a notification.
    NotificationDismissed(NotificationId),
    /// Dismissal timer for a notification fired.
    NotificationExpired(NotificationId),
    /// Coarse clock tick used to sweep stale notifications.
    Tick { now: Instant },
    NoOp,
}
