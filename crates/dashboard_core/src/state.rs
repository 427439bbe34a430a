use std::time::Instant;

use crate::controls::stop_button;
use crate::view_model::{AppViewModel, NotificationView};
use crate::{
    build_render_model, render_table, ButtonState, MonitoringControls, NotificationCenter,
    NotificationId, NotificationKind, PollScheduler, StartControl, StatusSnapshot, TableBody,
    UploadControl, UploadForm,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    poller: PollScheduler,
    snapshot: StatusSnapshot,
    table: TableBody,
    upload_form: UploadForm,
    upload: UploadControl,
    folder_input: String,
    start: StartControl,
    stop: ButtonState,
    notifications: NotificationCenter,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            poller: PollScheduler::default(),
            snapshot: StatusSnapshot::default(),
            table: TableBody::default(),
            upload_form: UploadForm::default(),
            upload: UploadControl::default(),
            folder_input: String::new(),
            start: StartControl::default(),
            stop: stop_button(false),
            notifications: NotificationCenter::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            polling_active: self.poller.is_active(),
            table: self.table.clone(),
            result_count: self.snapshot.results.len(),
            processing_count: self.snapshot.processing.len(),
            selected_file: self.upload_form.file.clone(),
            upload_button: self.upload.button().clone(),
            folder_input: self.folder_input.clone(),
            start_phase: self.start.phase(),
            start_button: self.start.button().clone(),
            stop_button: self.stop.clone(),
            notifications: self
                .notifications
                .items()
                .iter()
                .map(|item| NotificationView {
                    id: item.id,
                    message: item.message.clone(),
                    kind: item.kind,
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn poller(&self) -> &PollScheduler {
        &self.poller
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn poller_mut(&mut self) -> &mut PollScheduler {
        &mut self.poller
    }

    /// Replaces the snapshot and rebuilds the table from it alone.
    pub(crate) fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        self.table = render_table(&build_render_model(&snapshot));
        self.snapshot = snapshot;
        self.mark_dirty();
    }

    pub(crate) fn upload_form(&self) -> &UploadForm {
        &self.upload_form
    }

    pub(crate) fn upload_form_mut(&mut self) -> &mut UploadForm {
        &mut self.upload_form
    }

    pub(crate) fn upload_control_mut(&mut self) -> &mut UploadControl {
        &mut self.upload
    }

    pub(crate) fn folder_input(&self) -> &str {
        &self.folder_input
    }

    pub(crate) fn set_folder_input(&mut self, folder: String) {
        self.folder_input = folder;
    }

    pub(crate) fn start_phase(&self) -> crate::StartPhase {
        self.start.phase()
    }

    pub(crate) fn start_control_mut(&mut self) -> &mut StartControl {
        &mut self.start
    }

    pub(crate) fn stop_enabled(&self) -> bool {
        self.stop.enabled
    }

    pub(crate) fn stop_button_mut(&mut self) -> &mut ButtonState {
        &mut self.stop
    }

    pub(crate) fn apply_monitoring_controls(&mut self, controls: MonitoringControls) {
        self.start.apply(controls.start);
        self.stop = controls.stop;
        self.mark_dirty();
    }

    pub(crate) fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        self.mark_dirty();
        self.notifications.push(message, kind)
    }

    pub(crate) fn dismiss_notification(&mut self, id: NotificationId) {
        if self.notifications.dismiss(id) {
            self.mark_dirty();
        }
    }

    pub(crate) fn expire_notifications(&mut self, now: Instant) {
        if self.notifications.expire_older_than(now) > 0 {
            self.mark_dirty();
        }
    }
}
