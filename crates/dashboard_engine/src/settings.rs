use std::time::Duration;

use url::Url;

use crate::{ApiError, FailureKind};

pub const STATUS_PATH: &str = "api/status";
pub const UPLOAD_PATH: &str = "api/upload";
pub const START_PATH: &str = "api/start";
pub const STOP_PATH: &str = "api/stop";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    /// Parses `base_url`; a missing trailing slash is added so endpoint paths
    /// join below it instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:5000/").expect("static url"),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}
