//! Row-level presentation of the render model.

use crate::{RenderModel, RenderRow, ResultEntry, ResultStatus};

/// Path segment that marks the start of the static asset tree.
pub const ASSET_ROOT_MARKER: &str = "static/";
/// URL prefix under which the static asset tree is served.
pub const ASSET_URL_PREFIX: &str = "/static/";
/// Text shown in a cell with nothing to offer.
pub const ACTION_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBody {
    pub rows: Vec<TableRow>,
}

impl TableBody {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub index: String,
    pub label: String,
    pub status: StatusCell,
    pub action: ActionCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Danger,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCell {
    Badge {
        text: String,
        style: BadgeStyle,
        detail: Option<String>,
    },
    Progress {
        percent: u32,
        stage: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCell {
    Download { href: String },
    Placeholder,
}

impl ActionCell {
    pub fn text(&self) -> &str {
        match self {
            ActionCell::Download { href } => href,
            ActionCell::Placeholder => ACTION_PLACEHOLDER,
        }
    }
}

/// Builds a brand new table body; nothing is carried over from earlier renders.
pub fn render_table(model: &RenderModel) -> TableBody {
    let rows = model
        .iter()
        .map(|row| match row {
            RenderRow::Result { position, entry } => result_row(*position, entry),
            RenderRow::Processing { job_id, entry } => TableRow {
                index: row.index_label(),
                label: entry.label(job_id).to_string(),
                status: StatusCell::Progress {
                    percent: entry.progress,
                    stage: match &entry.error {
                        Some(error) => format!("{} ({error})", entry.stage),
                        None => entry.stage.clone(),
                    },
                },
                action: ActionCell::Placeholder,
            },
        })
        .collect();
    TableBody { rows }
}

fn result_row(position: usize, entry: &ResultEntry) -> TableRow {
    let style = match entry.status {
        ResultStatus::Completed => BadgeStyle::Success,
        ResultStatus::Error => BadgeStyle::Danger,
        ResultStatus::Duplicate | ResultStatus::Other(_) => BadgeStyle::Secondary,
    };
    let action = match (&entry.status, entry.summary_file.as_deref()) {
        (ResultStatus::Completed, Some(summary_file)) => ActionCell::Download {
            href: resolve_asset_href(summary_file),
        },
        _ => ActionCell::Placeholder,
    };
    TableRow {
        index: position.to_string(),
        label: entry.file.clone(),
        status: StatusCell::Badge {
            text: entry.status.to_string(),
            style,
            detail: entry.message.clone(),
        },
        action,
    }
}

/// Maps a server-side summary path to a URL under the static asset root.
///
/// Everything up to and including the first [`ASSET_ROOT_MARKER`] is dropped.
/// A path without the marker is taken as already relative to the asset root.
pub fn resolve_asset_href(summary_file: &str) -> String {
    let relative = match summary_file.find(ASSET_ROOT_MARKER) {
        Some(at) => &summary_file[at + ASSET_ROOT_MARKER.len()..],
        None => summary_file.trim_start_matches('/'),
    };
    format!("{ASSET_URL_PREFIX}{relative}")
}
