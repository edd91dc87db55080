//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;

use crate::error::WebServerResult;

/// Storage for uploaded rosters
#[mockall::automock]
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Persist an uploaded roster and return the reference clients send back
    async fn save(&self, content: Vec<u8>) -> WebServerResult<String>;

    /// Read a roster by the reference returned from `save`
    ///
    /// Unknown references are `FileNotFound`.
    async fn load(&self, file_path: &str) -> WebServerResult<String>;
}
