//! Service implementations
//!
//! Production implementations of the service traits.

pub mod roster_store;

#[cfg(test)]
mod tests;

pub use roster_store::RealRosterStore;
