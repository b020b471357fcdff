use sourcewatch_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        interval_secs = config.health.interval_secs,
        "Configuration loaded"
    );

    Ok(config)
}
