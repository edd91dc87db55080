//! Console presentation and CSV export
//!
//! Prints the partition to stdout and, when an output path is configured,
//! writes the CSV export next to it. Score views over an accepted result are
//! printed on request.

use std::path::PathBuf;

use async_trait::async_trait;

use shared::{logging, ProcessId, Team};

use crate::core::{export, Category, PartitionSummary, RankedTeam, TeamScore};
use crate::error::OrchestratorResult;
use crate::traits::{Notification, NotificationLevel, Presenter};

/// Presenter that writes to the terminal
#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter {
    output: Option<PathBuf>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also export accepted results to `path`
    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.output = Some(path);
        self
    }

    pub fn output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }

    pub fn show_categories(&self, categories: &[Category]) {
        println!("{}", render_categories(categories));
    }

    pub fn show_weighted(&self, scores: &[TeamScore]) {
        println!("{}", render_weighted(scores));
    }

    pub fn show_ranking(&self, category: &str, ranked: &[RankedTeam]) {
        println!("{}", render_ranking(category, ranked));
    }
}

/// Human-readable rendering of a partition
pub fn render(teams: &[Team], summary: &PartitionSummary) -> String {
    let mut out = format!(
        "Teams: {}  Members: {}  Members per team: ~{}\n",
        summary.team_count, summary.member_count, summary.members_per_team
    );
    for team in teams {
        out.push_str(&format!("\nTeam {} ({} members)\n", team.team_number, team.members.len()));
        for member in &team.members {
            out.push_str(&format!("  - {member}\n"));
        }
    }
    out
}

/// Attribute columns with their 0-based category index
pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories available.".to_string();
    }
    let mut out = String::from("Categories:\n");
    for category in categories {
        out.push_str(&format!("{} - {}\n", category.index, category.name));
    }
    out
}

/// Teams with each member's weighted score and the team total
pub fn render_weighted(scores: &[TeamScore]) -> String {
    let mut out = String::new();
    for team in scores {
        out.push_str(&format!("Team {} (total {:.2})\n", team.team_number, team.total));
        for member in &team.members {
            out.push_str(&format!("  - {} ({:.2})\n", member.name, member.score));
        }
    }
    out
}

pub fn render_ranking(category: &str, ranked: &[RankedTeam]) -> String {
    let mut out = format!("Teams by total {category} (highest first):\n");
    for team in ranked {
        out.push_str(&format!(
            "Rank {}: Team {} (total {:.2}): {}\n",
            team.rank,
            team.team_number,
            team.total,
            team.members.join(", ")
        ));
    }
    out
}

#[async_trait]
impl Presenter for ConsolePresenter {
    async fn present(&self, teams: &[Team], summary: &PartitionSummary) -> OrchestratorResult<()> {
        println!("{}", render(teams, summary));

        if let Some(path) = &self.output {
            tokio::fs::write(path, export::to_csv(teams)?).await?;
            logging::log_progress(ProcessId::current(), "Exported teams", &path.display().to_string());
        }
        Ok(())
    }

    async fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => eprintln!("❌ {}", notification.message),
            NotificationLevel::Success => println!("✅ {}", notification.message),
            NotificationLevel::Info => println!("ℹ️  {}", notification.message),
        }
    }
}
