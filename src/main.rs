//! postboard - REST backend for users, todos, posts and comments

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use postboard::config::Config;
use postboard::server;
use postboard::storage::StorageLayer;
use postboard::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about)]
struct Cli {
    /// Optional YAML configuration file; environment variables override it
    #[arg(short, long, env = "POSTBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Run database migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate form prints the whole cause chain
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;

    // Validation warns through tracing, so it runs after the subscriber is up
    init_tracing(config.logging()).context("failed to initialise logging")?;

    let build = postboard::build_info();
    info!(
        version = build.version,
        git_hash = build.git_hash,
        "postboard starting"
    );

    if cli.migrate_only {
        // Migrations need only the database settings
        config
            .storage()
            .database
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid database configuration: {}", e))?;
        let storage = StorageLayer::new(config.storage())
            .await
            .context("failed to connect to the database")?;
        storage.migrate().await.context("migration failed")?;
        info!("Migrations applied; exiting");
        return Ok(());
    }

    server::run_server(config).await.context("server error")?;
    Ok(())
}
