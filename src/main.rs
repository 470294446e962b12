//! # Lead Routing API Main Entry Point
//!
//! This is the main entry point for the Lead Routing API service.

use clap::{Parser, Subcommand};
use leadgen::{config::ConfigLoader, db, seeds, server::run_server, telemetry};
use migration::{Migrator, MigratorTrait};

#[derive(Parser)]
#[command(name = "leadgen", version, about = "Lead generation and routing API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run pending migrations and start the HTTP server (default)
    Serve,
    /// Run pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!("Configuration: {}", redacted_json);
    }

    let db = db::init_pool(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => {
            Migrator::up(&db, None).await?;
            tracing::info!("Migrations applied");
        }
        Command::Serve => {
            Migrator::up(&db, None).await?;

            if config.seed_users {
                seeds::seed_users(&db).await?;
            }

            run_server(config, db).await?;
        }
    }

    Ok(())
}
