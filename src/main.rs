//! CLI entry point: configure, seed on demand, and drive the queue loop.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transferq::config::Config;
use transferq::core::pipeline::{Outcome, process_next};
use transferq::persist::sqlite::SqliteGateway;
use transferq::seed;

#[derive(Parser, Debug)]
#[command(
    name = "transferq",
    about = "Processes queued transfer documents against the data table"
)]
struct Args {
    /// Database file; overrides TRANSFERQ_DB.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Process at most one document, then exit.
    #[arg(long, default_value_t = false)]
    once: bool,
    /// Reset and fill the database with demo fixtures before processing.
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
    /// Root objects to seed with --seed-demo.
    #[arg(long, default_value_t = 20)]
    seed_roots: usize,
    /// Children per root to seed with --seed-demo.
    #[arg(long, default_value_t = 50)]
    seed_children: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(db) = args.db {
        config.database_path = db;
    }

    let gateway = SqliteGateway::open(&config.database_path);
    if let Err(err) = gateway.ensure_schema() {
        error!(?err, "could not prepare database schema");
        return ExitCode::FAILURE;
    }

    if args.seed_demo {
        match seed::seed_demo(&gateway, args.seed_roots, args.seed_children) {
            Ok(summary) => info!(?summary, "demo fixtures ready"),
            Err(err) => {
                error!(?err, "seeding failed");
                return ExitCode::FAILURE;
            }
        }
    }

    loop {
        match process_next(&gateway) {
            Ok(Outcome::Processed {
                doc_id,
                rows_updated,
            }) => {
                info!(%doc_id, rows_updated, "processed");
                if args.once {
                    break;
                }
            }
            Ok(Outcome::NoDocument) => break,
            Err(err) => {
                error!(?err, "document processing failed");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
