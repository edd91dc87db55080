//! REST API handlers
//!
//! Thin extractors over [`WebServer`]; all validation lives there.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    response::Json,
};
use serde_json::{json, Value};

use shared::{PartitionRequest, TeamsResponse, UploadResponse};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::RosterStore;
use crate::webserver_impl::WebServer;

pub const UPLOAD_FIELD: &str = "file";

/// Upload endpoint - /upload-csv/
pub async fn upload_csv<R>(
    State(server): State<WebServer<R>>,
    mut multipart: Multipart,
) -> WebServerResult<Json<UploadResponse>>
where
    R: RosterStore + 'static,
{
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebServerError::invalid_request(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| WebServerError::invalid_request(format!("Malformed upload: {e}")))?;
        return server.accept_upload(bytes.to_vec()).await.map(Json);
    }

    Err(WebServerError::invalid_request(format!(
        "Missing '{UPLOAD_FIELD}' field in upload"
    )))
}

/// Generation endpoint - /generate-teams/
pub async fn generate_teams<R>(
    State(server): State<WebServer<R>>,
    payload: Result<Json<PartitionRequest>, JsonRejection>,
) -> WebServerResult<Json<TeamsResponse>>
where
    R: RosterStore + 'static,
{
    let Json(request) = payload
        .map_err(|rejection| WebServerError::invalid_request(format!("Malformed request: {}", rejection.body_text())))?;
    server.generate_teams(&request).await.map(Json)
}

/// Health check - /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
