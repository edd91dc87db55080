//! Team service entry point

use std::path::PathBuf;

use clap::Parser;
use shared::{logging, process_info, ProcessId};

use webserver::{
    config::{default_upload_dir, DEFAULT_PORT},
    RealRosterStore, ServiceConfig, WebServer, WebServerResult,
};

/// Reference partitioning service
#[derive(Parser, Debug)]
#[command(name = "team-maker-server")]
#[command(about = "Stores roster uploads and generates teams over HTTP")]
struct Args {
    /// Address to bind
    #[arg(long, env = "TEAM_MAKER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for the HTTP server
    #[arg(long, env = "TEAM_MAKER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory for uploaded rosters [default: <temp dir>/team-maker]
    #[arg(long, env = "TEAM_MAKER_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,

    /// Static frontend directory served at /
    #[arg(long)]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_service();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("team service on {}:{}", args.host, args.port));

    let upload_dir = args.upload_dir.clone().unwrap_or_else(default_upload_dir);
    let mut config = ServiceConfig::new(&args.host, args.port, upload_dir)?;
    if let Some(static_dir) = &args.static_dir {
        config = config.with_static_dir(static_dir);
    }
    process_info!(ProcessId::current(), "📁 Storing uploads in {}", config.upload_dir.display());

    let store = RealRosterStore::new(&config.upload_dir);
    WebServer::new(config, store).run().await
}
