use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dashboard_core::{
    CommandOutcome, Effect, Msg, ProcessingEntry, ResultEntry, ResultStatus, StatusSnapshot,
};
use dashboard_engine::{ApiError, CommandReply, EngineEvent, EngineHandle, StatusPayload, UploadRequest};
use dashboard_logging::{dashboard_debug, dashboard_info};

use super::app::LoopEvent;

/// Executes effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    loop_tx: mpsc::Sender<LoopEvent>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, loop_tx: mpsc::Sender<LoopEvent>) -> Self {
        let runner = Self {
            engine: Arc::new(engine),
            loop_tx,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStatus { seq } => self.engine.fetch_status(seq),
                Effect::Upload { form } => {
                    dashboard_info!("Upload requested file={:?}", form.file);
                    self.engine.upload(UploadRequest { file: form.file });
                }
                Effect::StartMonitoring { folder } => {
                    dashboard_info!("Start requested folder={}", folder);
                    self.engine.start_monitoring(folder);
                }
                Effect::StopMonitoring => {
                    dashboard_info!("Stop requested");
                    self.engine.stop_monitoring();
                }
                Effect::ScheduleDismissal { id, after } => {
                    let loop_tx = self.loop_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        // The loop may have shut down meanwhile; nothing to do then.
                        let _ = loop_tx.send(LoopEvent::Msg(Msg::NotificationExpired(id)));
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let loop_tx = self.loop_tx.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            let msg = match event {
                EngineEvent::StatusFetched { seq, result } => match result {
                    Ok(payload) => Msg::StatusReceived {
                        seq,
                        snapshot: map_snapshot(payload),
                    },
                    Err(err) => {
                        dashboard_debug!("Dropping failed status #{}: {}", seq, err);
                        continue;
                    }
                },
                EngineEvent::UploadCompleted(result) => Msg::UploadFinished(map_reply(result)),
                EngineEvent::StartCompleted(result) => Msg::StartFinished(map_reply(result)),
                EngineEvent::StopCompleted(result) => Msg::StopFinished(map_reply(result)),
            };
            if loop_tx.send(LoopEvent::Msg(msg)).is_err() {
                break;
            }
        });
    }
}

pub(crate) fn map_snapshot(payload: StatusPayload) -> StatusSnapshot {
    StatusSnapshot {
        results: payload
            .results
            .into_iter()
            .map(|record| ResultEntry {
                file: record.file,
                status: ResultStatus::parse(&record.status),
                summary_file: record.summary_file,
                message: record.message,
            })
            .collect(),
        processing: payload
            .processing
            .into_iter()
            .map(|(job_id, record)| {
                let entry = ProcessingEntry {
                    file: record.file,
                    stage: record.stage,
                    progress: record.progress,
                    status: record.status,
                    error: record.error,
                };
                (job_id, entry)
            })
            .collect(),
    }
}

pub(crate) fn map_reply(result: Result<CommandReply, ApiError>) -> CommandOutcome {
    match result {
        Ok(CommandReply::Accepted { message, .. }) => CommandOutcome::Accepted { message },
        Ok(CommandReply::Rejected { status, error }) => CommandOutcome::Rejected { status, error },
        Err(err) => CommandOutcome::Failed {
            reason: err.to_string(),
        },
    }
}
