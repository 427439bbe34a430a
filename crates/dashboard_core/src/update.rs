use crate::controls::{stop_button, STOP_BUSY_LABEL};
use crate::{
    monitoring_controls, AppState, CommandOutcome, Effect, Msg, NotificationKind, StartPhase,
    NOTIFICATION_TTL,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => {
            if state.poller_mut().activate() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PollTick => {
            if state.poller().is_active() {
                let seq = state.poller_mut().begin_request();
                vec![Effect::FetchStatus { seq }]
            } else {
                Vec::new()
            }
        }
        Msg::StatusReceived { seq, snapshot } => {
            // Responses may settle out of order; only a newer one may redraw.
            if state.poller_mut().accept(seq) {
                state.apply_snapshot(snapshot);
            }
            Vec::new()
        }
        Msg::UploadFileSelected(file) => {
            state.upload_form_mut().file = file;
            state.mark_dirty();
            Vec::new()
        }
        Msg::UploadSubmitted => {
            if state.upload_control_mut().is_busy() {
                return (state, Vec::new());
            }
            state.upload_control_mut().begin();
            state.mark_dirty();
            vec![Effect::Upload {
                form: state.upload_form().clone(),
            }]
        }
        Msg::UploadFinished(outcome) => {
            let mut effects = Vec::new();
            match outcome {
                CommandOutcome::Accepted { message } => {
                    activate_polling(&mut state);
                    effects.push(notify(&mut state, message, NotificationKind::Success));
                    state.upload_form_mut().reset();
                }
                CommandOutcome::Rejected { error, .. } => {
                    effects.push(notify(&mut state, error, NotificationKind::Error));
                }
                CommandOutcome::Failed { reason } => {
                    effects.push(notify(
                        &mut state,
                        format!("Upload failed: {reason}"),
                        NotificationKind::Error,
                    ));
                }
            }
            state.upload_control_mut().restore();
            state.mark_dirty();
            effects
        }
        Msg::FolderInputChanged(folder) => {
            state.set_folder_input(folder);
            state.mark_dirty();
            Vec::new()
        }
        Msg::StartClicked => {
            if state.start_phase() != StartPhase::Idle {
                return (state, Vec::new());
            }
            let folder = state.folder_input().trim().to_string();
            if folder.is_empty() {
                // Rejected locally; nothing goes to the server.
                let effect = notify(&mut state, "Enter a valid path.", NotificationKind::Error);
                return (state, vec![effect]);
            }
            state.start_control_mut().begin();
            state.mark_dirty();
            vec![Effect::StartMonitoring { folder }]
        }
        Msg::StartFinished(outcome) => {
            // The status helper may already have settled the control while the
            // request was in flight; the outcome is still reported.
            let in_flight = state.start_phase() == StartPhase::Starting;
            let effect = match outcome {
                CommandOutcome::Accepted { message } => {
                    activate_polling(&mut state);
                    let effect = notify(&mut state, message, NotificationKind::Success);
                    if in_flight {
                        state.start_control_mut().activate();
                        state.stop_button_mut().enabled = true;
                    }
                    effect
                }
                CommandOutcome::Rejected { error, .. } => {
                    let effect = notify(&mut state, error, NotificationKind::Error);
                    if in_flight {
                        state.start_control_mut().revert();
                    }
                    effect
                }
                CommandOutcome::Failed { reason } => {
                    let effect = notify(
                        &mut state,
                        format!("Failed to start monitoring: {reason}"),
                        NotificationKind::Error,
                    );
                    if in_flight {
                        state.start_control_mut().revert();
                    }
                    effect
                }
            };
            state.mark_dirty();
            vec![effect]
        }
        Msg::StopClicked => {
            if !state.stop_enabled() {
                return (state, Vec::new());
            }
            let stop = state.stop_button_mut();
            stop.enabled = false;
            stop.label = STOP_BUSY_LABEL.to_string();
            state.mark_dirty();
            vec![Effect::StopMonitoring]
        }
        Msg::StopFinished(outcome) => {
            let effect = match outcome {
                CommandOutcome::Accepted { message } => {
                    let effect = notify(&mut state, message, NotificationKind::Success);
                    state.apply_monitoring_controls(monitoring_controls(false, ""));
                    effect
                }
                CommandOutcome::Rejected { error, .. } => {
                    let effect = notify(&mut state, error, NotificationKind::Error);
                    reenable_stop(&mut state);
                    effect
                }
                CommandOutcome::Failed { reason } => {
                    let effect = notify(
                        &mut state,
                        format!("Failed to stop monitoring: {reason}"),
                        NotificationKind::Error,
                    );
                    reenable_stop(&mut state);
                    effect
                }
            };
            vec![effect]
        }
        Msg::MonitoringStatusChanged { active, folder } => {
            state.apply_monitoring_controls(monitoring_controls(active, &folder));
            Vec::new()
        }
        Msg::NotificationDismissed(id) | Msg::NotificationExpired(id) => {
            state.dismiss_notification(id);
            Vec::new()
        }
        Msg::Tick { now } => {
            state.expire_notifications(now);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn activate_polling(state: &mut AppState) {
    if state.poller_mut().activate() {
        state.mark_dirty();
    }
}

fn notify(state: &mut AppState, message: impl Into<String>, kind: NotificationKind) -> Effect {
    let id = state.notify(message, kind);
    Effect::ScheduleDismissal {
        id,
        after: NOTIFICATION_TTL,
    }
}

fn reenable_stop(state: &mut AppState) {
    *state.stop_button_mut() = stop_button(true);
    state.mark_dirty();
}
