use chrono::Local;
use dashboard_core::{
    AppViewModel, BadgeStyle, ButtonState, NotificationKind, StatusCell, TableRow,
};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{TITLE} | polling: {} | results: {} | processing: {} | {}",
        if view.polling_active { "on" } else { "off" },
        view.result_count,
        view.processing_count,
        Local::now().format("%H:%M:%S")
    ));

    for notification in &view.notifications {
        let marker = match notification.kind {
            NotificationKind::Success => "OK ",
            NotificationKind::Error => "ERR",
        };
        lines.push(format!(
            "[{marker} #{}] {}  (dismiss {})",
            notification.id, notification.message, notification.id
        ));
    }

    let selected = view
        .selected_file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "no file selected".to_string());
    lines.push(format!("{}  {}", format_button(&view.upload_button), selected));

    let folder = if view.folder_input.is_empty() {
        "no folder set"
    } else {
        view.folder_input.as_str()
    };
    lines.push(format!(
        "{}  {}  {}",
        format_button(&view.start_button),
        format_button(&view.stop_button),
        folder
    ));
    lines.push(String::new());

    lines.push(format!(
        "{:<COL_INDEX$} {:<COL_FILE$} {:<COL_STATUS$} {}",
        "#", "File", "Status", "Summary"
    ));
    if view.table.is_empty() {
        lines.push("No jobs yet.".to_string());
    }
    lines.extend(view.table.rows.iter().map(format_row));

    lines
}

/// Enabled buttons in square brackets, disabled ones in parentheses.
fn format_button(button: &ButtonState) -> String {
    if button.enabled {
        format!("[{}]", button.label)
    } else {
        format!("({})", button.label)
    }
}

fn format_row(row: &TableRow) -> String {
    format!(
        "{:<COL_INDEX$} {:<COL_FILE$} {:<COL_STATUS$} {}",
        row.index,
        row.label,
        format_status(&row.status),
        row.action.text()
    )
}

fn format_status(status: &StatusCell) -> String {
    match status {
        StatusCell::Badge {
            text,
            style,
            detail,
        } => {
            let badge = match style {
                BadgeStyle::Success => format!("<{text}>"),
                BadgeStyle::Danger => format!("!{text}!"),
                BadgeStyle::Secondary => format!("({text})"),
            };
            match detail {
                Some(detail) => format!("{badge} {detail}"),
                None => badge,
            }
        }
        StatusCell::Progress { percent, stage } => {
            format!("{} {percent}% {stage}", progress_bar(*percent))
        }
    }
}

/// The bar is drawn proportionally; the percentage text is printed as received.
fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * PROGRESS_BAR_WIDTH / 100).min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
