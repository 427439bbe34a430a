//! Dashboard core: pure state machine, reconciliation and view-model helpers.
mod command;
mod controls;
mod effect;
mod msg;
mod notifications;
mod poller;
mod reconcile;
mod snapshot;
mod state;
mod table;
mod update;
mod view_model;

pub use command::{CommandOutcome, UploadForm};
pub use controls::{
    monitoring_controls, ButtonState, ButtonStyle, MonitoringControls, StartControl, StartPhase,
    UploadControl, START_ACTIVE_LABEL, START_BUSY_LABEL, START_IDLE_LABEL, STOP_BUSY_LABEL,
    STOP_LABEL, UPLOAD_BUSY_LABEL, UPLOAD_LABEL,
};
pub use effect::Effect;
pub use msg::Msg;
pub use notifications::{
    Notification, NotificationCenter, NotificationId, NotificationKind, NOTIFICATION_TTL,
};
pub use poller::PollScheduler;
pub use reconcile::{build_render_model, RenderModel, RenderRow, PROCESSING_INDEX_LABEL};
pub use snapshot::{JobId, ProcessingEntry, ResultEntry, ResultStatus, StatusSnapshot};
pub use state::AppState;
pub use table::{
    render_table, resolve_asset_href, ActionCell, BadgeStyle, StatusCell, TableBody, TableRow,
    ACTION_PLACEHOLDER, ASSET_ROOT_MARKER, ASSET_URL_PREFIX,
};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView};
