//! Merge of finished results and in-flight jobs into one ordered row list.
//!
//! Reconciliation keeps no memory between snapshots: the model is rebuilt
//! from scratch every time, so a job the server stops reporting simply
//! disappears on the next render.

use crate::{JobId, ProcessingEntry, ResultEntry, StatusSnapshot};

/// Index label shown for in-flight jobs, which have no stable position.
pub const PROCESSING_INDEX_LABEL: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRow {
    Result {
        position: usize,
        entry: ResultEntry,
    },
    Processing {
        job_id: JobId,
        entry: ProcessingEntry,
    },
}

impl RenderRow {
    pub fn index_label(&self) -> String {
        match self {
            RenderRow::Result { position, .. } => position.to_string(),
            RenderRow::Processing { .. } => PROCESSING_INDEX_LABEL.to_string(),
        }
    }
}

pub type RenderModel = Vec<RenderRow>;

/// Results first in snapshot order, then processing jobs in key order.
/// A job present in both lists shows up twice.
pub fn build_render_model(snapshot: &StatusSnapshot) -> RenderModel {
    let results = snapshot
        .results
        .iter()
        .enumerate()
        .map(|(position, entry)| RenderRow::Result {
            position,
            entry: entry.clone(),
        });
    let processing = snapshot
        .processing
        .iter()
        .map(|(job_id, entry)| RenderRow::Processing {
            job_id: job_id.clone(),
            entry: entry.clone(),
        });
    results.chain(processing).collect()
}
