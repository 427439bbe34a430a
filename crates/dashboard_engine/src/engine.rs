use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use dashboard_logging::{dashboard_debug, dashboard_info, dashboard_warn, poll_tick};

use crate::{ApiError, ClientSettings, DashboardApi, EngineEvent, ReqwestApi, UploadRequest};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
}

enum EngineCommand {
    FetchStatus { seq: u64 },
    Upload(UploadRequest),
    Start { folder: String },
    Stop,
}

/// Runs backend requests on a background runtime.
///
/// Every command becomes its own task, so requests overlap freely and their
/// completions arrive on the event channel in whatever order they settle.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let api = ReqwestApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn DashboardApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            dashboard_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn fetch_status(&self, seq: u64) {
        self.send(EngineCommand::FetchStatus { seq });
    }

    pub fn upload(&self, request: UploadRequest) {
        self.send(EngineCommand::Upload(request));
    }

    pub fn start_monitoring(&self, folder: impl Into<String>) {
        self.send(EngineCommand::Start {
            folder: folder.into(),
        });
    }

    pub fn stop_monitoring(&self) {
        self.send(EngineCommand::Stop);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            dashboard_warn!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    api: &dyn DashboardApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchStatus { seq } => {
            let result = api.fetch_status().await;
            match &result {
                Ok(payload) => dashboard_debug!(
                    "Status #{} ok: {} results, {} processing",
                    seq,
                    payload.results.len(),
                    payload.processing.len()
                ),
                Err(err) => dashboard_warn!(
                    "Status #{} failed at tick {}; skipping: {}",
                    seq,
                    poll_tick(),
                    err
                ),
            }
            EngineEvent::StatusFetched { seq, result }
        }
        EngineCommand::Upload(request) => {
            dashboard_info!("Uploading {:?}", request.file);
            let result = api.upload(request).await;
            log_reply("upload", &result);
            EngineEvent::UploadCompleted(result)
        }
        EngineCommand::Start { folder } => {
            dashboard_info!("Starting monitoring of {}", folder);
            let result = api.start_monitoring(&folder).await;
            log_reply("start", &result);
            EngineEvent::StartCompleted(result)
        }
        EngineCommand::Stop => {
            let result = api.stop_monitoring().await;
            log_reply("stop", &result);
            EngineEvent::StopCompleted(result)
        }
    };
    let _ = event_tx.send(event);
}

fn log_reply(command: &str, result: &Result<crate::CommandReply, ApiError>) {
    match result {
        Ok(reply) => dashboard_info!("{} replied: {:?}", command, reply),
        Err(err) => dashboard_warn!("{} failed: {}", command, err),
    }
}
