mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use clap::{Parser as _, error::ErrorKind};
use room_conditions::{
    collector::{Collector, InvocationStatus},
    config::CollectorConfig,
    db::{PgRoomConditionStore, new_pool},
    nature_remo::NatureRemoClient,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let status = match Args::try_parse() {
        Ok(args) => match run(args).await {
            Ok(status) => status,
            Err(e) => {
                error!("{e:#}");
                InvocationStatus::failure(format!("{e:#}"))
            }
        },
        Err(e) => match args_failure(&e) {
            Some(status) => {
                error!("{e}");
                status
            }
            None => e.exit(),
        },
    };

    match serde_json::to_string(&status) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize invocation status: {e}"),
    }

    ExitCode::from(status.exit_code)
}

/// Maps a clap error onto the invocation status, except for help and version
/// output which clap prints itself.
fn args_failure(e: &clap::Error) -> Option<InvocationStatus> {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => {
            let rendered = e.to_string();
            let message = rendered
                .split("\n\nUsage")
                .next()
                .unwrap_or_default()
                .trim()
                .trim_start_matches("error: ");
            Some(InvocationStatus::failure(format!(
                "invalid arguments: {message}"
            )))
        }
    }
}

async fn run(args: Args) -> Result<InvocationStatus> {
    let config = CollectorConfig::new(args.access_key.unwrap_or_default(), args.timezone)
        .context("invalid collector configuration")?;

    let pool = new_pool(&args.database_url).context("invalid database URL")?;
    let store = PgRoomConditionStore::new(pool);

    if args.migrate {
        store
            .migrate()
            .await
            .context("failed to migrate database")?;
    }

    let source = NatureRemoClient::new(args.api_base_url);

    Ok(Collector::new(config, source, store).invoke().await)
}
