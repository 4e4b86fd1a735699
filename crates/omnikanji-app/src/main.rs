use std::sync::Arc;

use clap::Parser;
use omnikanji_config::Config;
use omnikanji_config::log::LogFormat;
use tracing_subscriber::EnvFilter;

use self::controller::AppController;
use self::state::AppState;

mod controller;
mod query;
mod refresh;
mod state;


/// Look Japanese words up on Jisho and KanjiDamage at once
#[derive(Parser, Debug)]
#[command(name = "omnikanji", version)]
struct Cli {
    /// Words to look up; read one per line from stdin when omitted
    #[arg(value_name = "QUERY")]
    queries: Vec<String>,

    /// Pretty-print the JSON results
    #[arg(short, long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::new();
    init_tracing(&config);

    tracing::debug!("Config: {config:?}");

    let state = Arc::new(AppState::load(config).await?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(cli.queries, cli.pretty);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("Lookups finished"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task failed during shutdown: {e:#}");
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
