//! # SourceWatch
//!
//! Monitors the health of the configured map data sources and serves the
//! results over a small JSON API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use sourcewatch_domain::CliOverrides;
use sourcewatch_jobs::{HealthRefreshJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "sourcewatch")]
#[command(version)]
#[command(about = "Health and cache monitor for map data sources")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address for the API server
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// API server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Seconds between automatic refresh cycles
    #[arg(short = 'i', long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
        interval_secs: cli.interval,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        sources = config.sources.endpoints.len(),
        "Starting SourceWatch"
    );

    let shutdown = CancellationToken::new();
    let services = di::Services::build(&config, shutdown.clone())?;
    let event_logger = di::spawn_event_logger(services.events);

    let jobs = JobRunner::new()
        .with_health_refresh(
            HealthRefreshJob::new(services.refresh)
                .with_interval(config.health.interval())
                .with_cancellation(shutdown.clone()),
        )
        .start();

    let result = server::start_web_server(&config.server, services.state, shutdown.clone()).await;

    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Job task failed");
        }
    }
    event_logger.abort();

    info!("SourceWatch stopped");
    result
}
