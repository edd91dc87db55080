//! Generation configuration
//!
//! The one mutable piece of state in a configuration session: which roster
//! is loaded, how to partition it, and the category selection.

use shared::{GenerationType, UploadResponse};

use super::roster::RosterModel;
use super::selection::CategorySet;
use crate::error::ValidationError;

pub const DEFAULT_TEAM_COUNT: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    roster: Option<RosterModel>,
    pub method: GenerationType,
    /// Kept as entered; range is checked when a request is built
    pub team_count: i64,
    pub categories: CategorySet,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            roster: None,
            method: GenerationType::Random,
            team_count: DEFAULT_TEAM_COUNT,
            categories: CategorySet::default(),
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster and start a fresh, unselected category set
    pub fn load_roster(&mut self, roster: RosterModel) {
        self.categories = CategorySet::new(roster.categories());
        self.roster = Some(roster);
    }

    /// Build the roster model from an upload response and load it
    pub fn load_upload(&mut self, upload: &UploadResponse) -> Result<(), ValidationError> {
        let roster = RosterModel::new(upload.headers.clone(), upload.file_path.clone())?;
        self.load_roster(roster);
        Ok(())
    }

    pub fn roster(&self) -> Option<&RosterModel> {
        self.roster.as_ref()
    }

    pub fn roster_mut(&mut self) -> Option<&mut RosterModel> {
        self.roster.as_mut()
    }

    /// The gating predicate for the generate action
    pub fn can_generate(&self) -> bool {
        self.roster.is_some()
            && self.team_count >= 2
            && (!self.method.is_weighted() || (self.categories.has_selection() && self.categories.is_valid()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(headers: &[&str]) -> UploadResponse {
        UploadResponse {
            message: None,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            file_path: "/tmp/x/uploaded_data.csv".to_string(),
        }
    }

    #[test]
    fn test_new_upload_replaces_categories() {
        let mut config = GenerationConfig::new();
        config.load_upload(&upload(&["Name", "A", "B"])).unwrap();
        config.categories.set_selected(1, true).unwrap();
        config.categories.set_weight(1, 1.0).unwrap();

        config.load_upload(&upload(&["Name", "X"])).unwrap();

        assert_eq!(config.categories.len(), 1);
        assert!(!config.categories.has_selection());
        assert_eq!(config.roster().unwrap().headers()[1], "X");
    }

    #[test]
    fn test_failed_upload_keeps_previous_roster() {
        let mut config = GenerationConfig::new();
        config.load_upload(&upload(&["Name", "A"])).unwrap();

        assert!(config.load_upload(&upload(&["Name"])).is_err());
        assert_eq!(config.categories.len(), 1);
        assert!(config.roster().is_some());
    }

    #[test]
    fn test_can_generate() {
        let mut config = GenerationConfig::new();
        assert!(!config.can_generate(), "no roster");

        config.load_upload(&upload(&["Name", "A", "B"])).unwrap();
        assert!(config.can_generate(), "random needs no categories");

        config.method = GenerationType::Weighted;
        assert!(!config.can_generate(), "weighted needs a selection");

        config.categories.set_selected(0, true).unwrap();
        config.categories.set_weight(0, 1.0).unwrap();
        assert!(config.can_generate());

        config.team_count = 1;
        assert!(!config.can_generate());
    }
}
