use std::path::PathBuf;
use std::sync::Once;

use dashboard_core::{
    update, AppState, ButtonState, ButtonStyle, CommandOutcome, Effect, Msg, NotificationKind,
    StartPhase, StatusSnapshot, UploadForm, START_ACTIVE_LABEL, START_BUSY_LABEL,
    START_IDLE_LABEL, STOP_BUSY_LABEL, UPLOAD_BUSY_LABEL, UPLOAD_LABEL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn accepted(message: &str) -> CommandOutcome {
    CommandOutcome::Accepted {
        message: message.to_string(),
    }
}

fn with_folder(folder: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::FolderInputChanged(folder.to_string()));
    state
}

fn started(folder: &str) -> AppState {
    let (state, _) = update(with_folder(folder), Msg::StartClicked);
    let (state, _) = update(state, Msg::StartFinished(accepted("Monitoring started")));
    state
}

#[test]
fn upload_enters_busy_state_and_emits_request() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UploadFileSelected(Some(PathBuf::from("/tmp/talk.mp3"))),
    );
    let (state, effects) = update(state, Msg::UploadSubmitted);

    assert_eq!(
        effects,
        vec![Effect::Upload {
            form: UploadForm::with_file("/tmp/talk.mp3")
        }]
    );
    let view = state.view();
    assert!(!view.upload_button.enabled);
    assert_eq!(view.upload_button.label, UPLOAD_BUSY_LABEL);

    // Disabled control: a second submit is swallowed.
    let (_state, effects) = update(state, Msg::UploadSubmitted);
    assert!(effects.is_empty());
}

#[test]
fn upload_success_notifies_resets_and_restores() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UploadFileSelected(Some(PathBuf::from("/tmp/talk.mp3"))),
    );
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, effects) = update(state, Msg::UploadFinished(accepted("ok")));

    let view = state.view();
    assert_eq!(effects.len(), 1);
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].kind, NotificationKind::Success);
    assert!(view.notifications[0].message.contains("ok"));
    assert_eq!(view.selected_file, None);
    assert_eq!(
        view.upload_button,
        ButtonState::new(true, UPLOAD_LABEL, ButtonStyle::Primary)
    );
    assert!(view.polling_active);
}

#[test]
fn upload_rejection_shows_server_error_and_restores() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::UploadSubmitted);
    let (state, _) = update(
        state,
        Msg::UploadFinished(CommandOutcome::Rejected {
            status: 400,
            error: "No file field".to_string(),
        }),
    );

    let view = state.view();
    assert_eq!(view.notifications[0].kind, NotificationKind::Error);
    assert_eq!(view.notifications[0].message, "No file field");
    assert!(view.upload_button.enabled);
    assert_eq!(view.upload_button.label, UPLOAD_LABEL);
    assert!(!view.polling_active);
}

#[test]
fn upload_transport_failure_wraps_reason() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::UploadFileSelected(Some(PathBuf::from("/tmp/a.wav"))),
    );
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, _) = update(
        state,
        Msg::UploadFinished(CommandOutcome::Failed {
            reason: "connection refused".to_string(),
        }),
    );

    let view = state.view();
    assert_eq!(view.notifications[0].message, "Upload failed: connection refused");
    // The form keeps its file so the user can retry.
    assert_eq!(view.selected_file, Some(PathBuf::from("/tmp/a.wav")));
    assert!(view.upload_button.enabled);
}

#[test]
fn start_with_blank_folder_never_reaches_server() {
    init_logging();
    let (state, effects) = update(with_folder("   \t "), Msg::StartClicked);

    assert!(effects
        .iter()
        .all(|effect| !matches!(effect, Effect::StartMonitoring { .. })));
    let view = state.view();
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].kind, NotificationKind::Error);
    assert_eq!(view.start_phase, StartPhase::Idle);
    assert!(view.start_button.enabled);
}

#[test]
fn start_trims_folder_and_shows_transient_label() {
    init_logging();
    let (state, effects) = update(with_folder("  /media/inbox  "), Msg::StartClicked);

    assert_eq!(
        effects,
        vec![Effect::StartMonitoring {
            folder: "/media/inbox".to_string()
        }]
    );
    let view = state.view();
    assert_eq!(view.start_phase, StartPhase::Starting);
    assert!(!view.start_button.enabled);
    assert_eq!(view.start_button.label, START_BUSY_LABEL);
}

#[test]
fn start_success_is_sticky() {
    init_logging();
    let state = started("/media/inbox");
    let view = state.view();
    assert_eq!(view.start_phase, StartPhase::Active);
    assert_eq!(
        view.start_button,
        ButtonState::new(false, START_ACTIVE_LABEL, ButtonStyle::Success)
    );
    assert!(view.stop_button.enabled);
    assert!(view.polling_active);

    // An empty status poll does not touch the control.
    let (state, effects) = update(state, Msg::PollTick);
    let Some(Effect::FetchStatus { seq }) = effects.first() else {
        panic!("expected fetch");
    };
    let (state, _) = update(
        state,
        Msg::StatusReceived {
            seq: *seq,
            snapshot: StatusSnapshot::default(),
        },
    );
    let (state, effects) = update(state, Msg::StartClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().start_button.label, START_ACTIVE_LABEL);
    assert!(!state.view().start_button.enabled);
}

#[test]
fn start_failure_returns_to_idle() {
    init_logging();
    let (state, _) = update(with_folder("/nope"), Msg::StartClicked);
    let (state, _) = update(
        state,
        Msg::StartFinished(CommandOutcome::Rejected {
            status: 400,
            error: "Invalid folder path".to_string(),
        }),
    );
    let view = state.view();
    assert_eq!(view.notifications[0].message, "Invalid folder path");
    assert_eq!(view.start_phase, StartPhase::Idle);
    assert!(view.start_button.enabled);
    assert_eq!(view.start_button.label, START_IDLE_LABEL);
    assert!(!view.stop_button.enabled);

    let (state, _) = update(state, Msg::StartClicked);
    let (state, _) = update(
        state,
        Msg::StartFinished(CommandOutcome::Failed {
            reason: "timeout".to_string(),
        }),
    );
    assert_eq!(
        state.view().notifications[1].message,
        "Failed to start monitoring: timeout"
    );
    assert_eq!(state.view().start_phase, StartPhase::Idle);
}

#[test]
fn stop_click_ignored_while_disabled() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::StopClicked);
    assert!(effects.is_empty());
    assert!(!state.view().stop_button.enabled);
}

#[test]
fn stop_success_resets_both_controls() {
    init_logging();
    let (state, effects) = update(started("/media/inbox"), Msg::StopClicked);
    assert_eq!(effects, vec![Effect::StopMonitoring]);
    assert_eq!(state.view().stop_button.label, STOP_BUSY_LABEL);

    let (state, _) = update(state, Msg::StopFinished(accepted("Monitoring stopped")));
    let view = state.view();
    assert_eq!(view.start_phase, StartPhase::Idle);
    assert_eq!(
        view.start_button,
        ButtonState::new(true, START_IDLE_LABEL, ButtonStyle::OutlinePrimary)
    );
    assert!(!view.stop_button.enabled);
}

#[test]
fn stop_failure_keeps_monitoring_state() {
    init_logging();
    let (state, _) = update(started("/media/inbox"), Msg::StopClicked);
    let (state, _) = update(
        state,
        Msg::StopFinished(CommandOutcome::Failed {
            reason: "connection reset".to_string(),
        }),
    );
    let view = state.view();
    assert_eq!(view.start_phase, StartPhase::Active);
    assert!(view.stop_button.enabled);
    assert_eq!(
        view.notifications.last().map(|n| n.message.as_str()),
        Some("Failed to stop monitoring: connection reset")
    );
}

#[test]
fn monitoring_status_helper_applies_outside_commands() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::MonitoringStatusChanged {
            active: true,
            folder: "/srv/watch".to_string(),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.start_button.label, "Monitoring: /srv/watch");
    assert!(!view.start_button.enabled);
    assert!(view.stop_button.enabled);
}

#[test]
fn start_outcome_is_reported_after_status_helper_settled_the_control() {
    init_logging();
    let (state, _) = update(with_folder("/in"), Msg::StartClicked);
    let (state, _) = update(
        state,
        Msg::MonitoringStatusChanged {
            active: false,
            folder: String::new(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::StartFinished(CommandOutcome::Rejected {
            status: 400,
            error: "Invalid folder path".to_string(),
        }),
    );
    assert_eq!(effects.len(), 1);
    let view = state.view();
    assert_eq!(view.notifications.len(), 1);
    assert_eq!(view.notifications[0].message, "Invalid folder path");
    assert_eq!(view.notifications[0].kind, NotificationKind::Error);
    // The helper's verdict on the control stands.
    assert_eq!(view.start_phase, StartPhase::Idle);
    assert!(view.start_button.enabled);
}

#[test]
fn late_start_success_still_activates_polling() {
    init_logging();
    let (state, _) = update(with_folder("/in"), Msg::StartClicked);
    let (state, _) = update(
        state,
        Msg::MonitoringStatusChanged {
            active: true,
            folder: "/in".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::StartFinished(accepted("Monitoring started")));
    assert_eq!(effects.len(), 1);
    let view = state.view();
    assert!(view.polling_active);
    assert_eq!(view.notifications[0].kind, NotificationKind::Success);
    assert_eq!(view.start_button.label, "Monitoring: /in");
    assert!(view.stop_button.enabled);
}
