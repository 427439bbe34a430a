//! Dashboard engine: backend API client and request execution.
mod api;
mod engine;
mod settings;
mod types;
mod wire;

pub use api::{DashboardApi, ReqwestApi};
pub use engine::{EngineError, EngineHandle};
pub use settings::ClientSettings;
pub use types::{ApiError, CommandReply, EngineEvent, FailureKind, UploadRequest};
pub use wire::{ProcessingRecord, ReplyBody, ResultRecord, StatusPayload};
