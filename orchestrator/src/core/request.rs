//! Partition request builder

use shared::{CategoryWeight, PartitionRequest};

use super::config::GenerationConfig;
use crate::error::ValidationError;

/// Round a weight to 2 decimal places for transmission
pub fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Build the outbound request from the current configuration
///
/// Validation uses full-precision weights; only the transmitted values are
/// rounded, so the same configuration always serializes to the same bytes.
pub fn build_request(config: &GenerationConfig) -> Result<PartitionRequest, ValidationError> {
    if config.team_count < 2 {
        return Err(ValidationError::TeamCountTooSmall {
            requested: config.team_count,
        });
    }
    let num_teams = u32::try_from(config.team_count).map_err(|_| ValidationError::TeamCountTooLarge {
        requested: config.team_count,
    })?;

    let roster = config.roster().ok_or(ValidationError::NoRoster)?;

    let categories = if config.method.is_weighted() {
        if !config.categories.has_selection() {
            return Err(ValidationError::NoCategoriesSelected);
        }
        if !config.categories.is_valid() {
            return Err(ValidationError::WeightsNotNormalized {
                sum: config.categories.current_sum(),
            });
        }
        Some(
            config
                .categories
                .selected()
                .map(|category| CategoryWeight {
                    index: category.index as u32,
                    weight: round_weight(category.weight),
                    name: category.name.clone(),
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(PartitionRequest {
        num_teams,
        generation_type: config.method,
        file_path: roster.source_reference().to_string(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roster::RosterModel;
    use shared::GenerationType;

    fn config(headers: &[&str]) -> GenerationConfig {
        let mut config = GenerationConfig::new();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        config.load_roster(RosterModel::new(headers, "token-1").unwrap());
        config
    }

    #[test]
    fn test_weighted_request_contains_only_selected() {
        let mut config = config(&["Name", "A", "B", "C"]);
        config.method = GenerationType::Weighted;
        config.team_count = 4;
        config.categories.set_selected(0, true).unwrap();
        config.categories.set_weight(0, 0.5).unwrap();
        config.categories.set_selected(2, true).unwrap();
        config.categories.set_weight(2, 0.5).unwrap();

        let request = build_request(&config).unwrap();

        assert_eq!(request.num_teams, 4);
        assert_eq!(request.file_path, "token-1");
        assert_eq!(
            request.categories,
            Some(vec![
                CategoryWeight {
                    index: 0,
                    weight: 0.5,
                    name: "A".to_string()
                },
                CategoryWeight {
                    index: 2,
                    weight: 0.5,
                    name: "C".to_string()
                },
            ])
        );
    }

    #[test]
    fn test_random_request_drops_stale_selection() {
        let mut config = config(&["Name", "A", "B"]);
        config.method = GenerationType::Weighted;
        config.categories.set_selected(0, true).unwrap();
        config.categories.set_weight(0, 0.3).unwrap();
        config.method = GenerationType::Random;

        let request = build_request(&config).unwrap();
        assert_eq!(request.categories, None);

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("categories"));
    }

    #[test]
    fn test_weights_rounded_for_transmission() {
        let mut config = config(&["Name", "A", "B", "C"]);
        config.method = GenerationType::Weighted;
        config.team_count = 3;
        for (index, weight) in [(0, 1.0 / 3.0), (1, 1.0 / 3.0), (2, 1.0 / 3.0)] {
            config.categories.set_selected(index, true).unwrap();
            config.categories.set_weight(index, weight).unwrap();
        }

        let first = serde_json::to_string(&build_request(&config).unwrap()).unwrap();
        let second = serde_json::to_string(&build_request(&config).unwrap()).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("\"weight\":0.33"));
    }

    #[test]
    fn test_rejections() {
        let mut config = config(&["Name", "A"]);
        config.team_count = 1;
        assert_eq!(
            build_request(&config),
            Err(ValidationError::TeamCountTooSmall { requested: 1 })
        );

        config.team_count = 2;
        config.method = GenerationType::WeightedRandom;
        assert_eq!(build_request(&config), Err(ValidationError::NoCategoriesSelected));

        config.categories.set_selected(0, true).unwrap();
        config.categories.set_weight(0, 0.8).unwrap();
        assert!(matches!(
            build_request(&config),
            Err(ValidationError::WeightsNotNormalized { .. })
        ));

        assert_eq!(
            build_request(&GenerationConfig::new()),
            Err(ValidationError::NoRoster)
        );
    }

    #[test]
    fn test_team_count_past_u32_is_too_large() {
        let mut config = config(&["Name", "A"]);
        config.team_count = i64::from(u32::MAX) + 1;

        let err = build_request(&config).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TeamCountTooLarge {
                requested: i64::from(u32::MAX) + 1
            }
        );
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_round_weight() {
        assert_eq!(round_weight(0.604), 0.6);
        assert_eq!(round_weight(0.125), 0.13);
        assert_eq!(round_weight(1.0), 1.0);
    }
}
