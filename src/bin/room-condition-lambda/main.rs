mod args;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use room_conditions::{
    collector::{Collector, InvocationStatus},
    config::CollectorConfig,
    db::{PgRoomConditionStore, RoomConditionStore, new_pool},
    nature_remo::{DeviceSource, NatureRemoClient},
};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // CloudWatch adds its own ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let args = Args::try_parse().context("invalid function configuration")?;
    let collector = build_collector(args)?;
    let collector = &collector;

    info!("room condition collector ready");

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle(collector, event).await
    }))
    .await
}

fn build_collector(args: Args) -> Result<Collector<NatureRemoClient, PgRoomConditionStore>> {
    let config = CollectorConfig::new(args.access_key.unwrap_or_default(), args.timezone)
        .context("invalid collector configuration")?;

    let pool = new_pool(&args.database_url).context("invalid database URL")?;

    Ok(Collector::new(
        config,
        NatureRemoClient::new(args.api_base_url),
        PgRoomConditionStore::new(pool),
    ))
}

/// The event payload carries nothing the collector needs.
async fn handle<D, S>(
    collector: &Collector<D, S>,
    event: LambdaEvent<Value>,
) -> Result<InvocationStatus, Error>
where
    D: DeviceSource,
    S: RoomConditionStore,
{
    info!(request_id = %event.context.request_id, "invoked");
    Ok(collector.invoke().await)
}
