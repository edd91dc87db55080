//! Orchestrator-specific error types
//!
//! Four kinds end a generation cycle: local validation failures, malformed
//! service responses, structured service errors and transport failures.
//! Each maps to exactly one user-facing notification via
//! [`OrchestratorError::user_message`].

use shared::SharedError;
use thiserror::Error;

use crate::core::state::GenerationPhase;

/// Local configuration problems; never reach the network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("No roster uploaded yet")]
    NoRoster,

    #[error("Roster needs a name column and at least one attribute column, found {found} column(s)")]
    TooFewColumns { found: usize },

    #[error("Team count must be at least 2, got {requested}")]
    TeamCountTooSmall { requested: i64 },

    #[error("Team count {requested} is too large")]
    TeamCountTooLarge { requested: i64 },

    #[error("Select at least one category for weighted generation")]
    NoCategoriesSelected,

    #[error("Category weights must sum to 1.0 (current: {sum:.2})")]
    WeightsNotNormalized { sum: f64 },

    #[error("Unknown category index: {index}")]
    UnknownCategory { index: usize },

    #[error("Unknown category: {name}")]
    UnknownCategoryName { name: String },

    #[error("Category {name} was not used to create the teams")]
    CategoryNotUsed { name: String },

    #[error("Roster file must have a .csv extension: {path}")]
    NotCsv { path: String },
}

/// Sub-classification of service-reported errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// The service could not read the uploaded roster
    InvalidRoster,
    Other,
}

impl ServiceErrorKind {
    /// Classify a service message by its content
    pub fn classify(message: &str) -> Self {
        if message.to_lowercase().contains("invalid csv") {
            ServiceErrorKind::InvalidRoster
        } else {
            ServiceErrorKind::Other
        }
    }
}

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed service response: {reason}")]
    MalformedResponse { reason: String, body: String },

    #[error("Service reported an error: {message}")]
    Service {
        message: String,
        kind: ServiceErrorKind,
    },

    #[error("Network communication error: {message}")]
    Transport { message: String },

    #[error("Invalid cycle transition: {from} → {to}")]
    InvalidTransition { from: GenerationPhase, to: GenerationPhase },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        OrchestratorError::ConfigurationError { field: field.into() }
    }

    pub fn malformed(reason: impl Into<String>, body: impl Into<String>) -> Self {
        OrchestratorError::MalformedResponse {
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = ServiceErrorKind::classify(&message);
        OrchestratorError::Service { message, kind }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        OrchestratorError::Transport { message: message.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, OrchestratorError::Validation(_))
    }

    /// The single notification text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            OrchestratorError::Validation(e) => e.to_string(),
            OrchestratorError::MalformedResponse { .. } => {
                "The server response couldn't be processed. Please try again or use a different CSV file.".to_string()
            }
            OrchestratorError::Service {
                kind: ServiceErrorKind::InvalidRoster,
                ..
            } => "Your CSV file appears to be invalid. Please check the format.".to_string(),
            OrchestratorError::Service { message, .. } => message.clone(),
            OrchestratorError::Transport { .. } => {
                "Network error while contacting the team service. Please check your connection and try again."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
