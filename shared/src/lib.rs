//! Shared types for the team maker system
//!
//! Contains only the types that cross the process boundary between the
//! partition client and the partitioning service, plus the logging setup
//! both binaries use.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
