//! Trait definitions with mockall annotations for testing
//!
//! Every collaborator the orchestrator talks to sits behind one of these
//! traits: the partitioning service, the roster upload endpoint and the
//! presentation layer. Real implementations live in `services`.

use std::path::Path;

use shared::{PartitionRequest, Team, UploadResponse};

use crate::core::PartitionSummary;
use crate::error::OrchestratorResult;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// One message for the user at the end of a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// External partitioning service
#[mockall::automock]
#[async_trait::async_trait]
pub trait PartitionService: Send + Sync {
    /// Submit a partition request and decode the returned teams
    ///
    /// # Returns
    /// The teams in service order, or a `MalformedResponse`, `Service` or
    /// `Transport` error
    async fn generate(&self, request: &PartitionRequest) -> OrchestratorResult<Vec<Team>>;
}

/// Roster upload endpoint
#[mockall::automock]
#[async_trait::async_trait]
pub trait RosterUploader: Send + Sync {
    /// Upload a roster file and receive its headers and source reference
    async fn upload(&self, path: &Path) -> OrchestratorResult<UploadResponse>;
}

/// Presentation collaborator: renders results and user notifications
#[mockall::automock]
#[async_trait::async_trait]
pub trait Presenter: Send + Sync {
    /// Hand off an accepted partition result
    async fn present(&self, teams: &[Team], summary: &PartitionSummary) -> OrchestratorResult<()>;

    /// Show a single notification to the user
    async fn notify(&self, notification: Notification);
}
