//! Generation cycle state management
//!
//! Pure state for one generation cycle at a time, testable without any
//! service or presentation collaborator.

use std::fmt;

use shared::{process_debug, ProcessId, Team};

use crate::error::{OrchestratorError, OrchestratorResult};

/// Phases of a single generation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    Validating,
    Submitting,
    AwaitingResponse,
    Succeeded,
    Failed,
}

impl GenerationPhase {
    /// A cycle is running; a new generate trigger must be ignored
    pub fn is_busy(&self) -> bool {
        !matches!(self, GenerationPhase::Idle)
    }

    fn can_transition_to(&self, next: GenerationPhase) -> bool {
        use GenerationPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Submitting)
                | (Validating, Failed)
                | (Submitting, AwaitingResponse)
                | (Submitting, Failed)
                | (AwaitingResponse, Succeeded)
                | (AwaitingResponse, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Validating => "validating",
            GenerationPhase::Submitting => "submitting",
            GenerationPhase::AwaitingResponse => "awaiting_response",
            GenerationPhase::Succeeded => "succeeded",
            GenerationPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Core orchestrator state
#[derive(Debug)]
pub struct OrchestratorState {
    phase: GenerationPhase,
    cycles_started: u64,
    last_result: Option<Vec<Team>>,
    last_error: Option<String>,
    torn_down: bool,
}

impl Default for OrchestratorState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrchestratorState {
    pub fn new() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            cycles_started: 0,
            last_result: None,
            last_error: None,
            torn_down: false,
        }
    }

    /// Move to `next`, rejecting transitions outside the cycle graph
    pub fn transition(&mut self, next: GenerationPhase) -> OrchestratorResult<()> {
        if !self.phase.can_transition_to(next) {
            return Err(OrchestratorError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        process_debug!(ProcessId::current(), "🔄 Cycle phase {} → {}", self.phase, next);
        self.phase = next;
        Ok(())
    }

    /// Start a new cycle; returns false when one is already in flight or the
    /// orchestrator has been shut down
    pub fn try_begin_cycle(&mut self) -> bool {
        if self.torn_down || self.phase.is_busy() {
            return false;
        }
        self.phase = GenerationPhase::Validating;
        self.cycles_started += 1;
        true
    }

    /// Record a successful cycle and return to idle
    pub fn complete_success(&mut self, teams: Vec<Team>) -> OrchestratorResult<()> {
        self.transition(GenerationPhase::Succeeded)?;
        self.last_result = Some(teams);
        self.last_error = None;
        self.transition(GenerationPhase::Idle)
    }

    /// Record a failed cycle and return to idle; the previous result is kept
    pub fn complete_failure(&mut self, reason: String) -> OrchestratorResult<()> {
        self.transition(GenerationPhase::Failed)?;
        self.last_error = Some(reason);
        self.transition(GenerationPhase::Idle)
    }

    /// Abandon the in-flight cycle after shutdown
    pub fn abandon(&mut self) {
        self.phase = GenerationPhase::Idle;
    }

    pub fn shut_down(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // Accessors for testing
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn cycles_started(&self) -> u64 {
        self.cycles_started
    }

    pub fn last_result(&self) -> Option<&[Team]> {
        self.last_result.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
