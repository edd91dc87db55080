//! Main orchestrator implementation
//!
//! Owns the generation configuration and drives one generation cycle at a
//! time: validate → build request → submit → verify → present. Every method
//! takes `&self`, so configuration edits and stray generate triggers can
//! interleave with an in-flight request on the same task set. The request is
//! snapshotted before submission; later edits only affect the next cycle.

use std::sync::Arc;
use tokio::sync::Mutex;

use shared::{
    logging, process_debug, process_info, process_warn, GenerationType, ProcessId, Team, UploadResponse,
};

use crate::{
    core::{
        build_request, verify_partition, GenerationConfig, GenerationPhase, OrchestratorState, PartitionSummary,
        RosterModel,
    },
    error::{OrchestratorError, OrchestratorResult},
    traits::{Notification, PartitionService, Presenter},
};

/// How a generate trigger ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// The partition was verified and handed to the presenter
    Succeeded(Vec<Team>),
    /// The cycle failed; the user has been notified
    Failed(OrchestratorError),
    /// Another cycle was already in flight; nothing happened
    Ignored,
    /// The response arrived after shutdown and was dropped
    Discarded,
}

impl CycleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CycleOutcome::Succeeded(_))
    }
}

/// Main orchestrator that coordinates one configuration session
pub struct Orchestrator<S, P>
where
    S: PartitionService + 'static,
    P: Presenter + 'static,
{
    /// The configuration object; single writer, never locked across a network call
    config: Arc<Mutex<GenerationConfig>>,

    /// Cycle state management
    state: Arc<Mutex<OrchestratorState>>,

    /// Injected services
    service: S,
    presenter: P,
}

impl<S, P> Orchestrator<S, P>
where
    S: PartitionService + 'static,
    P: Presenter + 'static,
{
    /// Create new orchestrator with injected dependencies
    pub fn new(service: S, presenter: P) -> Self {
        Self {
            config: Arc::new(Mutex::new(GenerationConfig::new())),
            state: Arc::new(Mutex::new(OrchestratorState::new())),
            service,
            presenter,
        }
    }

    /// Load the roster described by an upload response, replacing any previous one
    pub async fn load_upload(&self, upload: &UploadResponse) -> OrchestratorResult<()> {
        let mut config = self.config.lock().await;
        config.load_upload(upload)?;
        process_info!(
            ProcessId::current(),
            "📄 Roster loaded with {} categories",
            config.categories.len()
        );
        Ok(())
    }

    /// Load a roster model directly, replacing any previous one
    pub async fn load_roster(&self, roster: RosterModel) {
        let mut config = self.config.lock().await;
        config.load_roster(roster);
        process_info!(
            ProcessId::current(),
            "📄 Roster loaded with {} categories",
            config.categories.len()
        );
    }

    pub async fn set_method(&self, method: GenerationType) {
        self.config.lock().await.method = method;
    }

    pub async fn set_team_count(&self, team_count: i64) {
        self.config.lock().await.team_count = team_count;
    }

    pub async fn set_selected(&self, index: usize, selected: bool) -> OrchestratorResult<()> {
        let mut config = self.config.lock().await;
        config.categories.set_selected(index, selected)?;
        log_weight_state(&config);
        Ok(())
    }

    pub async fn set_weight(&self, index: usize, weight: f64) -> OrchestratorResult<()> {
        let mut config = self.config.lock().await;
        config.categories.set_weight(index, weight)?;
        log_weight_state(&config);
        Ok(())
    }

    /// Set a weight from raw user input; unparseable text counts as 0
    pub async fn set_weight_input(&self, index: usize, input: &str) -> OrchestratorResult<()> {
        let mut config = self.config.lock().await;
        config.categories.set_weight_input(index, input)?;
        log_weight_state(&config);
        Ok(())
    }

    /// Select a category by header label (or numeric index) and set its weight
    pub async fn select_weighted(&self, name: &str, weight: f64) -> OrchestratorResult<usize> {
        let mut config = self.config.lock().await;
        let index = config.categories.find_by_name(name)?;
        config.categories.set_selected(index, true)?;
        config.categories.set_weight(index, weight)?;
        log_weight_state(&config);
        Ok(index)
    }

    pub async fn is_valid(&self) -> bool {
        self.config.lock().await.categories.is_valid()
    }

    pub async fn current_sum(&self) -> f64 {
        self.config.lock().await.categories.current_sum()
    }

    /// Whether the generate action should be enabled
    pub async fn can_generate(&self) -> bool {
        let busy = self.state.lock().await.phase().is_busy();
        !busy && self.config.lock().await.can_generate()
    }

    pub async fn config_snapshot(&self) -> GenerationConfig {
        self.config.lock().await.clone()
    }

    pub async fn phase(&self) -> GenerationPhase {
        self.state.lock().await.phase()
    }

    pub async fn last_result(&self) -> Option<Vec<Team>> {
        self.state.lock().await.last_result().map(<[Team]>::to_vec)
    }

    /// Reason the most recent cycle failed, cleared by the next success
    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error().map(str::to_string)
    }

    /// Tear the orchestrator down; a response still in flight is discarded
    pub async fn shutdown(&self) {
        self.state.lock().await.shut_down();
        logging::log_shutdown(ProcessId::current(), "orchestrator torn down");
    }

    /// Run one generation cycle
    pub async fn generate(&self) -> CycleOutcome {
        if !self.state.lock().await.try_begin_cycle() {
            process_debug!(ProcessId::current(), "⏳ Generate ignored: a cycle is already in flight");
            return CycleOutcome::Ignored;
        }

        // Snapshot the request and roster under the config lock, then release it
        let built = {
            let config = self.config.lock().await;
            build_request(&config).map(|request| (request, config.roster().cloned()))
        };
        let (request, roster) = match built {
            Ok(built) => built,
            Err(e) => return self.fail(e.into()).await,
        };

        if let Err(e) = self.advance(GenerationPhase::Submitting).await {
            return self.fail(e).await;
        }
        process_info!(
            ProcessId::current(),
            "📤 Requesting {} teams ({})",
            request.num_teams,
            request.generation_type
        );
        if let Err(e) = self.advance(GenerationPhase::AwaitingResponse).await {
            return self.fail(e).await;
        }

        let response = self.service.generate(&request).await;

        {
            let mut state = self.state.lock().await;
            if state.is_torn_down() {
                state.abandon();
                process_debug!(ProcessId::current(), "🗑️ Late response discarded after shutdown");
                return CycleOutcome::Discarded;
            }
        }

        let teams = match response.and_then(|teams| {
            verify_partition(&teams, request.num_teams, roster.as_ref())?;
            Ok(teams)
        }) {
            Ok(teams) => teams,
            Err(e) => return self.fail(e).await,
        };

        let summary = PartitionSummary::from_teams(&teams);
        if let Err(e) = self.presenter.present(&teams, &summary).await {
            return self.fail(e).await;
        }

        let completed = self.state.lock().await.complete_success(teams.clone());
        if let Err(e) = completed {
            return self.fail(e).await;
        }
        logging::log_success(
            ProcessId::current(),
            &format!("{} teams generated for {} members", summary.team_count, summary.member_count),
        );
        self.presenter
            .notify(Notification::success(format!(
                "{} teams successfully generated!",
                summary.team_count
            )))
            .await;

        CycleOutcome::Succeeded(teams)
    }

    async fn advance(&self, next: GenerationPhase) -> OrchestratorResult<()> {
        self.state.lock().await.transition(next)
    }

    /// End the cycle with a failure: log, reset to idle, notify once
    async fn fail(&self, error: OrchestratorError) -> CycleOutcome {
        match &error {
            OrchestratorError::MalformedResponse { reason, body } => {
                process_warn!(ProcessId::current(), "⚠️ Malformed service response: {}", reason);
                if !body.is_empty() {
                    process_debug!(ProcessId::current(), "Raw response body: {}", body);
                }
            }
            OrchestratorError::Validation(e) => {
                process_debug!(ProcessId::current(), "🚫 Validation failed: {}", e);
            }
            other => logging::log_error(ProcessId::current(), "Team generation", other),
        }

        {
            let mut state = self.state.lock().await;
            if state.complete_failure(error.to_string()).is_err() {
                state.abandon();
            }
        }

        self.presenter.notify(Notification::error(error.user_message())).await;
        CycleOutcome::Failed(error)
    }
}

fn log_weight_state(config: &GenerationConfig) {
    process_debug!(
        ProcessId::current(),
        "⚖️ Weights sum to {:.2} (valid: {})",
        config.categories.current_sum(),
        config.categories.is_valid()
    );
}
