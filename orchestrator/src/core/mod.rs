//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod config;
pub mod export;
pub mod ranking;
pub mod request;
pub mod roster;
pub mod selection;
pub mod state;
pub mod summary;
pub mod verify;

pub use config::GenerationConfig;
pub use ranking::{rank_by_category, weighted_scores, RankedTeam, TeamScore};
pub use request::{build_request, round_weight};
pub use roster::{Category, RosterEntry, RosterModel};
pub use selection::{CategorySet, WEIGHT_TOLERANCE};
pub use state::{GenerationPhase, OrchestratorState};
pub use summary::PartitionSummary;
pub use verify::verify_partition;
