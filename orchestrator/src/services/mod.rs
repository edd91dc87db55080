//! Service implementations
//!
//! This module contains real implementations of all service traits.
//! These are the production implementations that handle actual I/O operations.

pub mod console_presenter;
pub mod http_client;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use console_presenter::ConsolePresenter;
pub use http_client::RealPartitionClient;
