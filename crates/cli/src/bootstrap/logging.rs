use sourcewatch_domain::{Config, LogFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    match config.logging.format {
        LogFormat::Text => builder.with_ansi(true).init(),
        LogFormat::Json => builder.json().with_current_span(true).init(),
    }

    info!(
        level = %config.logging.level,
        format = ?config.logging.format,
        "Logging initialized"
    );
}
