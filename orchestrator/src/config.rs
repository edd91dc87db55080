//! Client configuration

use std::time::Duration;

use shared::SharedError;
use url::Url;

use crate::error::OrchestratorResult;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the partitioning service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Always ends with `/` so endpoint paths join beneath it
    pub server_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(server: &str) -> OrchestratorResult<Self> {
        let mut server_url = Url::parse(server.trim()).map_err(|e| invalid_server(server, &e.to_string()))?;
        if !matches!(server_url.scheme(), "http" | "https") {
            return Err(invalid_server(server, "scheme must be http or https"));
        }
        if !server_url.path().ends_with('/') {
            let path = format!("{}/", server_url.path());
            server_url.set_path(&path);
        }

        Ok(Self {
            server_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn invalid_server(server: &str, reason: &str) -> crate::error::OrchestratorError {
    SharedError::InvalidConfig {
        field: "server".to_string(),
        value: format!("{server} ({reason})"),
    }
    .into()
}
