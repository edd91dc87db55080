//! Service-specific tests
//!
//! Each service has its own test file; HTTP tests run against a wiremock server.


// Common test utilities for services
#[cfg(test)]
pub mod common {
    use shared::Team;

    pub fn sample_teams() -> Vec<Team> {
        vec![
            Team::new(1, vec!["Ana".to_string(), "Ben".to_string()]),
            Team::new(2, vec!["Cleo".to_string(), "Dev".to_string()]),
        ]
    }
}
