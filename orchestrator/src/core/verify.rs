//! Client-side verification of a partition result
//!
//! The service is trusted to run the algorithm, not to return a well-formed
//! partition. Anything that is not one is treated as a malformed response.

use std::collections::{HashMap, HashSet};

use shared::Team;

use super::roster::RosterModel;
use crate::error::{OrchestratorError, OrchestratorResult};

/// Check that `teams` is a partition of the roster into `requested` teams
///
/// Empty teams are accepted: the service returns them when more teams are
/// requested than there are entities.
pub fn verify_partition(teams: &[Team], requested: u32, roster: Option<&RosterModel>) -> OrchestratorResult<()> {
    if teams.len() != requested as usize {
        return Err(malformed(format!(
            "expected {requested} teams, service returned {}",
            teams.len()
        )));
    }

    let mut numbers = HashSet::new();
    for team in teams {
        if team.team_number == 0 {
            return Err(malformed("team numbers must start at 1".to_string()));
        }
        if !numbers.insert(team.team_number) {
            return Err(malformed(format!("team number {} appears twice", team.team_number)));
        }
    }

    let Some(entities) = roster.and_then(RosterModel::entities) else {
        return Ok(());
    };

    // Compare as multisets: rosters may legitimately repeat a display name.
    let mut expected: HashMap<&str, usize> = HashMap::new();
    for entity in entities {
        *expected.entry(entity.as_str()).or_default() += 1;
    }
    let mut assigned: HashMap<&str, usize> = HashMap::new();
    for member in teams.iter().flat_map(|t| t.members.iter()) {
        *assigned.entry(member.as_str()).or_default() += 1;
    }

    for (member, count) in &assigned {
        match expected.get(member) {
            None => return Err(malformed(format!("member '{member}' is not in the roster"))),
            Some(wanted) if count > wanted => {
                return Err(malformed(format!("member '{member}' assigned more than once")));
            }
            _ => {}
        }
    }
    for (entity, wanted) in &expected {
        match assigned.get(entity).copied().unwrap_or(0) {
            0 => return Err(malformed(format!("member '{entity}' missing from every team"))),
            count if count < *wanted => {
                return Err(malformed(format!("member '{entity}' assigned {count} of {wanted} times")));
            }
            _ => {}
        }
    }

    Ok(())
}

fn malformed(reason: String) -> OrchestratorError {
    OrchestratorError::malformed(reason, String::new())
}
