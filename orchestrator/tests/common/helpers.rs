//! Test helpers and builder patterns for orchestrator tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use ::orchestrator::*;
use shared::{PartitionRequest, Team};

use super::fixtures::TestFixtures;

/// Builder pattern for creating test orchestrators with sensible defaults
pub struct OrchestratorBuilder {
    service: MockPartitionService,
    presenter: MockPresenter,
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl OrchestratorBuilder {
    /// Create a new builder; the presenter accepts everything and records notifications
    pub fn new() -> Self {
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let mut presenter = MockPresenter::new();

        presenter.expect_present().returning(|_, _| Ok(())).times(0..);

        let recorded = Arc::clone(&notifications);
        presenter
            .expect_notify()
            .returning(move |notification| recorded.lock().unwrap().push(notification))
            .times(0..);

        Self {
            service: MockPartitionService::new(),
            presenter,
            notifications,
        }
    }

    /// Configure the partition service mock with a setup function
    pub fn with_service<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockPartitionService),
    {
        setup(&mut self.service);
        self
    }

    /// Replace the presenter mock; notifications are then no longer recorded
    pub fn with_presenter<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockPresenter),
    {
        let mut presenter = MockPresenter::new();
        setup(&mut presenter);
        self.presenter = presenter;
        self
    }

    /// Build the orchestrator and hand back the notification log
    pub fn build(self) -> (TestOrchestrator, Arc<Mutex<Vec<Notification>>>) {
        (Orchestrator::new(self.service, self.presenter), self.notifications)
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for test orchestrator with all mocks
pub type TestOrchestrator = Orchestrator<MockPartitionService, MockPresenter>;

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Load the fixture roster and select Skill/Experience with the given weights
    pub async fn configure_weighted<S, P>(orchestrator: &Orchestrator<S, P>, skill: f64, experience: f64, teams: i64)
    where
        S: PartitionService + 'static,
        P: Presenter + 'static,
    {
        orchestrator.load_roster(TestFixtures::roster()).await;
        orchestrator.set_method(shared::GenerationType::Weighted).await;
        orchestrator.set_team_count(teams).await;
        orchestrator.select_weighted("Skill", skill).await.unwrap();
        orchestrator.select_weighted("Experience", experience).await.unwrap();
    }

    pub fn messages(notifications: &Arc<Mutex<Vec<Notification>>>) -> Vec<Notification> {
        notifications.lock().unwrap().clone()
    }
}

/// Partition service that parks every call until released
///
/// Lets a test act while a request is in flight.
#[derive(Clone)]
pub struct GatedService {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    pub calls: Arc<AtomicUsize>,
    pub seen: Arc<Mutex<Vec<PartitionRequest>>>,
    teams: Vec<Team>,
}

impl GatedService {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
            teams,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PartitionService for GatedService {
    async fn generate(&self, request: &PartitionRequest) -> OrchestratorResult<Vec<Team>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.teams.clone())
    }
}
