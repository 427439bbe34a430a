use std::path::PathBuf;

use crate::{ButtonState, NotificationId, NotificationKind, StartPhase, TableBody};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub polling_active: bool,
    pub table: TableBody,
    pub result_count: usize,
    pub processing_count: usize,
    pub selected_file: Option<PathBuf>,
    pub upload_button: ButtonState,
    pub folder_input: String,
    pub start_phase: StartPhase,
    pub start_button: ButtonState,
    pub stop_button: ButtonState,
    pub notifications: Vec<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}
