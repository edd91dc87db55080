//! Reference partitioning service for the team maker
//!
//! Accepts roster uploads, stores them per upload, and splits a stored roster
//! into teams on request.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::ServiceConfig;
pub use error::{WebServerError, WebServerResult};
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{MockRosterStore, RosterStore};

// Re-export service implementations
pub use services::RealRosterStore;
