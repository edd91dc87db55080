//! Team maker client core
//!
//! Holds the generation configuration for one session, validates it into a
//! partition request, submits it to the partitioning service and verifies the
//! returned teams before handing them to a presenter.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::ClientConfig;
pub use core::{CategorySet, GenerationConfig, GenerationPhase, OrchestratorState, PartitionSummary, RosterModel};
pub use error::{OrchestratorError, OrchestratorResult, ServiceErrorKind, ValidationError};
pub use orchestrator::{CycleOutcome, Orchestrator};
pub use traits::{
    MockPartitionService, MockPresenter, MockRosterUploader, Notification, NotificationLevel, PartitionService,
    Presenter, RosterUploader,
};
