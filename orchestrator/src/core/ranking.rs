//! Score views over a partition result
//!
//! Teams come back from the service as names only, so scores are recovered by
//! joining members to the roster's attribute values by display name. A member
//! the roster does not list scores zero.

use std::collections::HashMap;

use shared::{CategoryWeight, Team};

use super::roster::RosterEntry;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberScore {
    pub name: String,
    pub score: f64,
}

/// A team with each member's weighted score and the team total
#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore {
    pub team_number: u32,
    pub total: f64,
    pub members: Vec<MemberScore>,
}

/// One row of a single-category ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    /// 1-based
    pub rank: usize,
    pub team_number: u32,
    pub total: f64,
    pub members: Vec<String>,
}

// Duplicate names resolve to the last row
fn index_by_name(entries: &[RosterEntry]) -> HashMap<&str, &RosterEntry> {
    entries.iter().map(|entry| (entry.name.as_str(), entry)).collect()
}

fn weighted_value(entry: Option<&&RosterEntry>, categories: &[CategoryWeight]) -> f64 {
    entry.map_or(0.0, |entry| {
        categories
            .iter()
            .map(|category| entry.value(category.index as usize) * category.weight)
            .sum()
    })
}

/// Σ value × weight per member over `categories`, summed per team
pub fn weighted_scores(teams: &[Team], entries: &[RosterEntry], categories: &[CategoryWeight]) -> Vec<TeamScore> {
    let by_name = index_by_name(entries);

    teams
        .iter()
        .map(|team| {
            let members: Vec<MemberScore> = team
                .members
                .iter()
                .map(|name| MemberScore {
                    name: name.clone(),
                    score: weighted_value(by_name.get(name.as_str()), categories),
                })
                .collect();
            TeamScore {
                team_number: team.team_number,
                total: members.iter().map(|member| member.score).sum(),
                members,
            }
        })
        .collect()
}

/// Rank teams by their unweighted total in one of the categories used to build them
///
/// Highest total first; equal totals put the larger team first, then the
/// lower team number.
pub fn rank_by_category(
    teams: &[Team],
    entries: &[RosterEntry],
    categories: &[CategoryWeight],
    name: &str,
) -> Result<Vec<RankedTeam>, ValidationError> {
    let category = categories
        .iter()
        .find(|category| category.name == name)
        .ok_or_else(|| ValidationError::CategoryNotUsed { name: name.to_string() })?;
    let column = category.index as usize;
    let by_name = index_by_name(entries);

    let mut totals: Vec<(&Team, f64)> = teams
        .iter()
        .map(|team| {
            let total = team
                .members
                .iter()
                .filter_map(|member| by_name.get(member.as_str()))
                .map(|entry| entry.value(column))
                .sum();
            (team, total)
        })
        .collect();

    totals.sort_by(|(a, a_total), (b, b_total)| {
        b_total
            .total_cmp(a_total)
            .then_with(|| b.members.len().cmp(&a.members.len()))
            .then_with(|| a.team_number.cmp(&b.team_number))
    });

    Ok(totals
        .into_iter()
        .enumerate()
        .map(|(position, (team, total))| RankedTeam {
            rank: position + 1,
            team_number: team.team_number,
            total,
            members: team.members.clone(),
        })
        .collect())
}
