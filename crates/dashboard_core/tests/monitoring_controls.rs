use dashboard_core::{monitoring_controls, ButtonStyle, START_IDLE_LABEL};

#[test]
fn exactly_one_control_is_enabled() {
    for active in [true, false] {
        let controls = monitoring_controls(active, "/in");
        assert_ne!(controls.start.enabled, controls.stop.enabled);
    }
}

#[test]
fn active_state_names_the_folder() {
    let controls = monitoring_controls(true, "/media/inbox");
    assert_eq!(controls.start.label, "Monitoring: /media/inbox");
    assert_eq!(controls.start.style, ButtonStyle::Success);
    assert!(!controls.start.enabled);
    assert!(controls.stop.enabled);
}

#[test]
fn inactive_state_uses_idle_label() {
    let controls = monitoring_controls(false, "/ignored");
    assert_eq!(controls.start.label, START_IDLE_LABEL);
    assert_eq!(controls.start.style, ButtonStyle::OutlinePrimary);
    assert!(controls.start.enabled);
    assert!(!controls.stop.enabled);
}
