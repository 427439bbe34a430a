//! Button states for the command controls.

pub const START_IDLE_LABEL: &str = "Start Monitoring";
pub const START_BUSY_LABEL: &str = "Starting...";
pub const START_ACTIVE_LABEL: &str = "Monitoring Active";
pub const STOP_LABEL: &str = "Stop Monitoring";
pub const STOP_BUSY_LABEL: &str = "Stopping...";
pub const UPLOAD_LABEL: &str = "Upload";
pub const UPLOAD_BUSY_LABEL: &str = "Uploading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    OutlinePrimary,
    Success,
    OutlineDanger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: String,
    pub style: ButtonStyle,
}

impl ButtonState {
    pub fn new(enabled: bool, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            enabled,
            label: label.into(),
            style,
        }
    }
}

/// Lifecycle of the start control within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPhase {
    #[default]
    Idle,
    Starting,
    /// Sticky: only the monitoring-status helper leaves this phase.
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartControl {
    phase: StartPhase,
    button: ButtonState,
}

impl Default for StartControl {
    fn default() -> Self {
        Self {
            phase: StartPhase::Idle,
            button: ButtonState::new(true, START_IDLE_LABEL, ButtonStyle::OutlinePrimary),
        }
    }
}

impl StartControl {
    pub fn phase(&self) -> StartPhase {
        self.phase
    }

    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    pub(crate) fn begin(&mut self) {
        self.phase = StartPhase::Starting;
        self.button.enabled = false;
        self.button.label = START_BUSY_LABEL.to_string();
    }

    pub(crate) fn activate(&mut self) {
        self.phase = StartPhase::Active;
        self.button = ButtonState::new(false, START_ACTIVE_LABEL, ButtonStyle::Success);
    }

    /// Back to idle after a failed start; the style is left as it was.
    pub(crate) fn revert(&mut self) {
        self.phase = StartPhase::Idle;
        self.button.enabled = true;
        self.button.label = START_IDLE_LABEL.to_string();
    }

    pub(crate) fn apply(&mut self, button: ButtonState) {
        self.phase = if button.enabled {
            StartPhase::Idle
        } else {
            StartPhase::Active
        };
        self.button = button;
    }
}

/// The submit control of the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadControl {
    button: ButtonState,
    /// Label to restore once the in-flight upload settles.
    saved_label: Option<String>,
}

impl Default for UploadControl {
    fn default() -> Self {
        Self {
            button: ButtonState::new(true, UPLOAD_LABEL, ButtonStyle::Primary),
            saved_label: None,
        }
    }
}

impl UploadControl {
    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    pub fn is_busy(&self) -> bool {
        self.saved_label.is_some()
    }

    pub(crate) fn begin(&mut self) {
        let original = std::mem::replace(&mut self.button.label, UPLOAD_BUSY_LABEL.to_string());
        self.saved_label = Some(original);
        self.button.enabled = false;
    }

    pub(crate) fn restore(&mut self) {
        if let Some(original) = self.saved_label.take() {
            self.button.label = original;
        }
        self.button.enabled = true;
    }
}

/// Paired start/stop control state derived from monitoring status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringControls {
    pub start: ButtonState,
    pub stop: ButtonState,
}

/// Exactly one of the two controls is enabled for any input.
pub fn monitoring_controls(is_active: bool, folder: &str) -> MonitoringControls {
    if is_active {
        MonitoringControls {
            start: ButtonState::new(false, format!("Monitoring: {folder}"), ButtonStyle::Success),
            stop: stop_button(true),
        }
    } else {
        MonitoringControls {
            start: ButtonState::new(true, START_IDLE_LABEL, ButtonStyle::OutlinePrimary),
            stop: stop_button(false),
        }
    }
}

pub(crate) fn stop_button(enabled: bool) -> ButtonState {
    ButtonState::new(enabled, STOP_LABEL, ButtonStyle::OutlineDanger)
}
