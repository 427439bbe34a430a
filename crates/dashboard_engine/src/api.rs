use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::settings::{START_PATH, STATUS_PATH, STOP_PATH, UPLOAD_PATH};
use crate::wire::StartBody;
use crate::{
    ApiError, ClientSettings, CommandReply, FailureKind, ReplyBody, StatusPayload, UploadRequest,
};

/// The backend endpoints the dashboard depends on.
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusPayload, ApiError>;
    async fn upload(&self, request: UploadRequest) -> Result<CommandReply, ApiError>;
    async fn start_monitoring(&self, folder: &str) -> Result<CommandReply, ApiError>;
    async fn stop_monitoring(&self) -> Result<CommandReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl DashboardApi for ReqwestApi {
    async fn fetch_status(&self) -> Result<StatusPayload, ApiError> {
        let url = self.settings.endpoint(STATUS_PATH)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }

    async fn upload(&self, request: UploadRequest) -> Result<CommandReply, ApiError> {
        let url = self.settings.endpoint(UPLOAD_PATH)?;
        let mut form = Form::new();
        if let Some(path) = request.file.as_deref() {
            form = form.part("file", file_part(path).await?);
        }
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_reply(response).await
    }

    async fn start_monitoring(&self, folder: &str) -> Result<CommandReply, ApiError> {
        let url = self.settings.endpoint(START_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&StartBody { folder })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_reply(response).await
    }

    async fn stop_monitoring(&self) -> Result<CommandReply, ApiError> {
        let url = self.settings.endpoint(STOP_PATH)?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_reply(response).await
    }
}

async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ApiError::new(FailureKind::Io, format!("{}: {err}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}

/// Decodes `{message}` / `{error}`. A body that is not JSON is a decode
/// failure whatever the status code.
async fn read_reply(response: reqwest::Response) -> Result<CommandReply, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    let reply: ReplyBody = serde_json::from_slice(&body)
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;

    if status.is_success() {
        Ok(CommandReply::Accepted {
            status: status.as_u16(),
            message: reply.message.unwrap_or_else(|| status_line(status)),
        })
    } else {
        Ok(CommandReply::Rejected {
            status: status.as_u16(),
            error: reply.error.unwrap_or_else(|| status_line(status)),
        })
    }
}

fn status_line(status: StatusCode) -> String {
    status.to_string()
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
