//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tower::ServiceExt;

use webserver::{RealRosterStore, ServiceConfig, WebServer};

pub const BOUNDARY: &str = "team-maker-test-boundary";

pub const ROSTER_CSV: &str = "Name , Skill,Experience\r\n\
    Ana,9,2\r\n\
    Ben,7,5\r\n\
    \r\n\
    Cleo,4,8\r\n\
    Dev,6,6\r\n\
    Eli,3,9\r\n";

/// Router over a fresh temporary upload directory
pub fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = ServiceConfig::new("127.0.0.1", 0, dir.path()).unwrap();
    let store = RealRosterStore::new(dir.path());
    (WebServer::new(config, store).build_router(), dir)
}

/// Multipart upload request with one form field
pub fn upload_request(field: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"roster.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/upload-csv/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn generate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-teams/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON body
pub async fn send<T: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
