//! Core shared types and identifiers
//!
//! The request/response shapes here are the wire contract between the
//! partition client and the partitioning service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();
static EMBEDDED: ProcessId = ProcessId::Embedded;

/// Process identifier written into every log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// The `team-maker` command line client
    Client,
    /// The partitioning service
    Service,
    /// No binary has claimed an identity (library use, tests)
    Embedded,
}

impl ProcessId {
    /// Initialize the global process ID for the client
    pub fn init_client() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Client)
    }

    /// Initialize the global process ID for the partitioning service
    pub fn init_service() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Service)
    }

    /// Get the global process ID, `Embedded` until one of the init functions ran
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&EMBEDDED)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Client => write!(f, "client"),
            ProcessId::Service => write!(f, "service"),
            ProcessId::Embedded => write!(f, "embedded"),
        }
    }
}

/// How the service should partition the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationType {
    /// Uniformly random assignment, no category input
    Random,
    /// Balanced assignment driven by weighted category scores
    #[serde(alias = "categorical")]
    Weighted,
    /// Score-ordered but randomly placed assignment
    #[serde(alias = "random_categorical")]
    WeightedRandom,
}

impl GenerationType {
    /// Whether this method consumes category weights
    pub fn is_weighted(&self) -> bool {
        matches!(self, GenerationType::Weighted | GenerationType::WeightedRandom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::Random => "random",
            GenerationType::Weighted => "weighted",
            GenerationType::WeightedRandom => "weighted_random",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GenerationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(GenerationType::Random),
            "weighted" | "categorical" => Ok(GenerationType::Weighted),
            "weighted_random" | "random_categorical" => Ok(GenerationType::WeightedRandom),
            other => Err(format!("Unknown generation type: {other}")),
        }
    }
}

/// One selected category as sent to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub index: u32,
    pub weight: f64,
    pub name: String,
}

/// Body of `POST /generate-teams/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRequest {
    pub num_teams: u32,
    pub generation_type: GenerationType,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryWeight>>,
}

/// A single team in a partition result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_number: u32,
    pub members: Vec<String>,
}

impl Team {
    pub fn new(team_number: u32, members: Vec<String>) -> Self {
        Self {
            team_number,
            members,
        }
    }
}

/// Success body of `POST /generate-teams/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

/// Success body of `POST /upload-csv/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub headers: Vec<String>,
    pub file_path: String,
}

/// Error body returned by the service with any non-success status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_request_omits_categories_key() {
        let request = PartitionRequest {
            num_teams: 3,
            generation_type: GenerationType::Random,
            file_path: "/tmp/roster.csv".to_string(),
            categories: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generation_type"], "random");
        assert!(json.get("categories").is_none());
    }

    #[test]
    fn test_generation_type_accepts_legacy_names() {
        let weighted: GenerationType = serde_json::from_str("\"categorical\"").unwrap();
        let weighted_random: GenerationType = serde_json::from_str("\"random_categorical\"").unwrap();

        assert_eq!(weighted, GenerationType::Weighted);
        assert_eq!(weighted_random, GenerationType::WeightedRandom);
        assert_eq!(serde_json::to_string(&weighted).unwrap(), "\"weighted\"");
        assert!(weighted_random.is_weighted());
        assert!(!GenerationType::Random.is_weighted());
    }

    #[test]
    fn test_generation_type_from_str() {
        assert_eq!("Weighted".parse::<GenerationType>().unwrap(), GenerationType::Weighted);
        assert_eq!("random".parse::<GenerationType>().unwrap(), GenerationType::Random);
        assert!("balanced".parse::<GenerationType>().is_err());
    }

    #[test]
    fn test_error_response_raw_output_is_optional() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed, ErrorResponse::new("boom"));

        let with_raw: ErrorResponse =
            serde_json::from_str(r#"{"error":"boom","raw_output":"trace"}"#).unwrap();
        assert_eq!(with_raw.raw_output.as_deref(), Some("trace"));
    }

    #[test]
    fn test_team_wire_shape() {
        let team = Team::new(2, vec!["Ana".to_string(), "Ben".to_string()]);

        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["team_number"], 2);
        assert_eq!(json["members"], serde_json::json!(["Ana", "Ben"]));
    }

    #[test]
    fn test_process_id_display() {
        assert_eq!(ProcessId::Client.to_string(), "client");
        assert_eq!(ProcessId::Service.to_string(), "service");
        assert_eq!(ProcessId::Embedded.to_string(), "embedded");
    }
}
