//! Command-line entry point for the team maker client
//!
//! Uploads a roster, applies the requested configuration and runs a single
//! generation cycle against the partitioning service.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;

use orchestrator::{
    config::DEFAULT_SERVER_URL,
    core::{
        build_request, export, rank_by_category,
        roster::{entities_from_csv, entries_from_csv},
        weighted_scores, RosterModel,
    },
    services::{ConsolePresenter, RealPartitionClient},
    ClientConfig, CycleOutcome, Orchestrator, RosterUploader,
};
use shared::{logging, process_info, GenerationType, ProcessId};

/// Split a roster into balanced teams using the team maker service
#[derive(Parser, Debug)]
#[command(name = "team-maker")]
#[command(about = "Uploads a roster CSV and generates teams")]
pub struct Args {
    /// Base URL of the partitioning service
    #[arg(long, env = "TEAM_MAKER_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Roster CSV: first column names, remaining columns numeric scores
    #[arg(long)]
    pub roster: PathBuf,

    /// Number of teams to generate
    #[arg(long, default_value = "2")]
    pub teams: i64,

    /// Generation method (random, weighted, weighted_random)
    #[arg(long, default_value = "random")]
    pub method: GenerationType,

    /// Category weight as name=value; repeat for each selected category
    #[arg(long = "weight", value_parser = parse_weight)]
    pub weights: Vec<(String, String)>,

    /// Print the roster's categories and exit without generating
    #[arg(long)]
    pub list_categories: bool,

    /// Print each member's weighted score and the team totals (weighted methods only)
    #[arg(long)]
    pub show_weights: bool,

    /// Rank the generated teams by their total in this weighted category
    #[arg(long, value_name = "CATEGORY")]
    pub rank_by: Option<String>,

    /// Also export the teams as CSV; a directory gets the dated default file name
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_weight(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing category name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    if (args.show_weights || args.rank_by.is_some()) && !args.method.is_weighted() {
        bail!("--show-weights and --rank-by need a weighted generation method");
    }

    ProcessId::init_client();
    logging::init_tracing_with_level(Some(&args.log_level));
    let process_id = ProcessId::current();
    logging::log_startup(process_id, &format!("team maker client against {}", args.server));

    let config = ClientConfig::new(&args.server)?.with_timeout(Duration::from_secs(args.timeout_secs));
    let client = RealPartitionClient::new(&config)?;

    let mut presenter = ConsolePresenter::new();
    if let Some(output) = &args.output {
        let path = if output.is_dir() {
            output.join(export::default_file_name(chrono::Local::now().date_naive()))
        } else {
            output.clone()
        };
        presenter = presenter.with_output(path);
    }

    let upload = client
        .upload(&args.roster)
        .await
        .with_context(|| format!("Uploading roster {}", args.roster.display()))?;
    process_info!(process_id, "📄 Uploaded roster with headers {:?}", upload.headers);

    // Known entities let the client check the returned partition member by member
    let content = tokio::fs::read_to_string(&args.roster).await?;
    let roster =
        RosterModel::new(upload.headers.clone(), upload.file_path.clone())?.with_entities(entities_from_csv(&content));

    if args.list_categories {
        presenter.show_categories(&roster.categories());
        return Ok(());
    }

    let orchestrator = Orchestrator::new(client, presenter.clone());
    orchestrator.load_roster(roster).await;
    orchestrator.set_method(args.method).await;
    orchestrator.set_team_count(args.teams).await;
    for (name, value) in &args.weights {
        let index = orchestrator.select_weighted(name, 0.0).await?;
        orchestrator.set_weight_input(index, value).await?;
    }

    let outcome = orchestrator.generate().await;
    let generation = orchestrator.config_snapshot().await;
    orchestrator.shutdown().await;

    match outcome {
        CycleOutcome::Succeeded(teams) => {
            if args.show_weights || args.rank_by.is_some() {
                let entries = entries_from_csv(&content)?;
                let categories = build_request(&generation)?.categories.unwrap_or_default();
                if args.show_weights {
                    presenter.show_weighted(&weighted_scores(&teams, &entries, &categories));
                }
                if let Some(name) = &args.rank_by {
                    presenter.show_ranking(name, &rank_by_category(&teams, &entries, &categories, name)?);
                }
            }
            Ok(())
        }
        CycleOutcome::Failed(e) => bail!(e.user_message()),
        CycleOutcome::Ignored | CycleOutcome::Discarded => bail!("generation did not complete"),
    }
}
