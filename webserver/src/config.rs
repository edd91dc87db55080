//! Service configuration

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use shared::SharedError;

use crate::error::WebServerResult;

pub const DEFAULT_PORT: u16 = 8000;

/// `<temp dir>/team-maker`
pub fn default_upload_dir() -> PathBuf {
    std::env::temp_dir().join("team-maker")
}

/// Where the service listens and where rosters are stored
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_address: SocketAddr,
    pub upload_dir: PathBuf,
    /// Optional frontend served at `/`
    pub static_dir: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn new(host: &str, port: u16, upload_dir: impl Into<PathBuf>) -> WebServerResult<Self> {
        let ip: IpAddr = host.trim().parse().map_err(|_| SharedError::InvalidConfig {
            field: "host".to_string(),
            value: host.to_string(),
        })?;

        Ok(Self {
            bind_address: SocketAddr::new(ip, port),
            upload_dir: upload_dir.into(),
            static_dir: None,
        })
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_host() {
        let config = ServiceConfig::new("0.0.0.0", DEFAULT_PORT, default_upload_dir()).unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8000");
        assert!(config.upload_dir.ends_with("team-maker"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_new_rejects_hostname() {
        assert!(ServiceConfig::new("not an ip", 80, "u").is_err());
    }
}
