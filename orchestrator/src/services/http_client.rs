//! Real partitioning service client
//!
//! Talks to the service over HTTP. Response bodies are read as text and
//! decoded explicitly, so a body of the wrong shape becomes a
//! `MalformedResponse` instead of being coerced.

use std::path::Path;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use shared::{process_debug, ErrorResponse, PartitionRequest, ProcessId, Team, TeamsResponse, UploadResponse};

use crate::config::ClientConfig;
use crate::error::{OrchestratorError, OrchestratorResult, ValidationError};
use crate::traits::{PartitionService, RosterUploader};

pub const UPLOAD_PATH: &str = "upload-csv/";
pub const GENERATE_PATH: &str = "generate-teams/";

/// HTTP client for the partitioning service
#[derive(Clone)]
pub struct RealPartitionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl RealPartitionClient {
    pub fn new(config: &ClientConfig) -> OrchestratorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OrchestratorError::config(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> OrchestratorResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| OrchestratorError::config(format!("Invalid endpoint {path}: {e}")))
    }

    /// Read the body and decode it according to the status
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> OrchestratorResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OrchestratorError::transport(format!("Failed to read response body: {e}")))?;
        decode_body(status, body)
    }
}

/// Decode a service response body: the typed payload on success, the
/// structured error otherwise
pub fn decode_body<T: DeserializeOwned>(status: StatusCode, body: String) -> OrchestratorResult<T> {
    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| OrchestratorError::malformed(e.to_string(), body));
    }

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => {
            if let Some(raw_output) = &error.raw_output {
                process_debug!(ProcessId::current(), "Service raw output: {}", raw_output);
            }
            Err(OrchestratorError::service(error.error))
        }
        Err(e) => Err(OrchestratorError::malformed(
            format!("HTTP {status} with undecodable error body: {e}"),
            body,
        )),
    }
}

fn transport_error(e: reqwest::Error) -> OrchestratorError {
    if e.is_timeout() {
        OrchestratorError::transport(format!("Request timed out: {e}"))
    } else {
        OrchestratorError::transport(e.to_string())
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

#[async_trait]
impl PartitionService for RealPartitionClient {
    async fn generate(&self, request: &PartitionRequest) -> OrchestratorResult<Vec<Team>> {
        let url = self.endpoint(GENERATE_PATH)?;
        process_debug!(ProcessId::current(), "POST {}", url);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let teams: TeamsResponse = Self::decode(response).await?;
        Ok(teams.teams)
    }
}

#[async_trait]
impl RosterUploader for RealPartitionClient {
    async fn upload(&self, path: &Path) -> OrchestratorResult<UploadResponse> {
        if !is_csv(path) {
            return Err(ValidationError::NotCsv {
                path: path.display().to_string(),
            }
            .into());
        }

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "roster.csv".to_string());
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(|e| OrchestratorError::config(format!("Invalid upload content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.endpoint(UPLOAD_PATH)?;
        process_debug!(ProcessId::current(), "POST {} ({})", url, path.display());

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode(response).await
    }
}
