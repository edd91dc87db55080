//! Main webserver implementation
//!
//! The WebServer struct owns the configuration and the injected roster store,
//! builds the router and runs the upload and generation workflows.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use shared::{logging, process_info, PartitionRequest, ProcessId, TeamsResponse, UploadResponse};

use crate::config::ServiceConfig;
use crate::core::{check_categories, generate, parse_headers, parse_people, score_people, ScoredPerson};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::RosterStore;
use crate::web::handlers::api;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "CSV uploaded successfully";

/// Main webserver struct with dependency injection
pub struct WebServer<R: RosterStore> {
    config: Arc<ServiceConfig>,
    store: Arc<R>,
}

impl<R: RosterStore> Clone for WebServer<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
        }
    }
}

impl<R> WebServer<R>
where
    R: RosterStore + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: ServiceConfig, store: R) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/upload-csv/", post(api::upload_csv::<R>))
            .route("/generate-teams/", post(api::generate_teams::<R>))
            .route("/health", get(api::health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone());

        match &self.config.static_dir {
            Some(static_dir) => router.fallback_service(ServeDir::new(static_dir)),
            None => router,
        }
    }

    /// Start the webserver and serve until Ctrl-C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let address = self.config.bind_address;

        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {address}: {e}")))?;

        process_info!(ProcessId::current(), "🌐 Team service listening on http://{}", address);
        if self.config.static_dir.is_some() {
            process_info!(ProcessId::current(), "📊 Frontend available at http://{}/", address);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                logging::log_shutdown(ProcessId::current(), "received Ctrl-C");
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))
    }

    /// Store an uploaded roster and report its headers
    pub async fn accept_upload(&self, content: Vec<u8>) -> WebServerResult<UploadResponse> {
        let text = std::str::from_utf8(&content)
            .map_err(|_| WebServerError::invalid_csv("file is not valid UTF-8 text"))?;
        let headers = parse_headers(text)?;

        let file_path = self.store.save(content).await?;
        logging::log_progress(
            ProcessId::current(),
            "Roster uploaded",
            &format!("{} columns at {}", headers.len(), file_path),
        );

        Ok(UploadResponse {
            message: Some(UPLOAD_SUCCESS_MESSAGE.to_string()),
            headers,
            file_path,
        })
    }

    /// Validate a partition request against its stored roster and generate teams
    pub async fn generate_teams(&self, request: &PartitionRequest) -> WebServerResult<TeamsResponse> {
        if request.num_teams < 2 {
            return Err(WebServerError::invalid_request(format!(
                "Number of teams must be at least 2, got {}",
                request.num_teams
            )));
        }

        let content = self.store.load(&request.file_path).await?;
        let headers = parse_headers(&content)?;
        let people = parse_people(&content)?;

        let scored = if request.generation_type.is_weighted() {
            let categories = request
                .categories
                .as_deref()
                .filter(|categories| !categories.is_empty())
                .ok_or(WebServerError::CategoriesRequired)?;
            check_categories(&headers, categories)?;
            score_people(&people, categories)?
        } else {
            people
                .into_iter()
                .map(|person| ScoredPerson {
                    name: person.name,
                    score: 0.0,
                })
                .collect()
        };

        let member_count = scored.len();
        let mut rng = StdRng::from_entropy();
        let teams = generate(request.generation_type, scored, request.num_teams as usize, &mut rng);

        logging::log_success(
            ProcessId::current(),
            &format!(
                "{} teams generated for {} members ({})",
                teams.len(),
                member_count,
                request.generation_type
            ),
        );
        Ok(TeamsResponse { teams })
    }
}
