//! Test fixtures and data for orchestrator tests
//!
//! This module provides consistent test data and fixtures used across all test suites.

use orchestrator::RosterModel;
use shared::{Team, UploadResponse};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SOURCE_REFERENCE: &'static str = "uploads/3f2a/uploaded_data.csv";

    /// Roster with two scored categories
    pub const ROSTER_CSV: &'static str = "Name,Skill,Experience\n\
        Ana,9,2\n\
        Ben,7,5\n\
        Cleo,4,8\n\
        Dev,6,6\n\
        Eli,3,9\n\
        Fay,8,1\n";

    pub fn headers() -> Vec<String> {
        vec!["Name".to_string(), "Skill".to_string(), "Experience".to_string()]
    }

    pub fn entities() -> Vec<String> {
        ["Ana", "Ben", "Cleo", "Dev", "Eli", "Fay"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn upload_response() -> UploadResponse {
        UploadResponse {
            message: Some("CSV uploaded successfully".to_string()),
            headers: Self::headers(),
            file_path: Self::SOURCE_REFERENCE.to_string(),
        }
    }

    /// Roster model with known entities
    pub fn roster() -> RosterModel {
        RosterModel::new(Self::headers(), Self::SOURCE_REFERENCE)
            .unwrap()
            .with_entities(Self::entities())
    }

    /// A valid three-team partition of the fixture roster
    pub fn three_teams() -> Vec<Team> {
        vec![
            Team::new(1, vec!["Ana".to_string(), "Eli".to_string()]),
            Team::new(2, vec!["Fay".to_string(), "Cleo".to_string()]),
            Team::new(3, vec!["Ben".to_string(), "Dev".to_string()]),
        ]
    }

    pub fn two_teams() -> Vec<Team> {
        vec![
            Team::new(1, vec!["Ana".to_string(), "Cleo".to_string(), "Eli".to_string()]),
            Team::new(2, vec!["Ben".to_string(), "Dev".to_string(), "Fay".to_string()]),
        ]
    }
}
