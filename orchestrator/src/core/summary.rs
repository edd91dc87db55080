//! Display statistics for a partition result

use shared::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSummary {
    pub team_count: usize,
    pub member_count: usize,
    /// Floor of members / teams
    pub members_per_team: usize,
}

impl PartitionSummary {
    pub fn from_teams(teams: &[Team]) -> Self {
        let team_count = teams.len();
        let member_count = teams.iter().map(|t| t.members.len()).sum();
        let members_per_team = if team_count == 0 { 0 } else { member_count / team_count };

        Self {
            team_count,
            member_count,
            members_per_team,
        }
    }
}
