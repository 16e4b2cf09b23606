mod args;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use args::Args;
use chrono::Utc;
use clap::Parser as _;
use envsense::client::HttpSensorClient;
use envsense::collector::collect_once;
use envsense::store::Store;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let today = Utc::now().with_timezone(&args.timezone).date_naive();
    let store = Store::open(&args.data_dir, today)
        .await
        .context("failed to open day store")?;

    let client = HttpSensorClient::new(Duration::from_secs(args.http_timeout_secs))
        .context("failed to build HTTP client")?;

    let summary = collect_once(&client, &store, &args.devices, args.timezone).await?;
    store.close().await;

    tracing::info!(
        "appended {} readings ({} devices failed)",
        summary.appended,
        summary.failed
    );

    Ok(())
}
