use thiserror::Error;
use tracing::{info, Level};

use crate::carte::CartePizzeria;
use crate::config::{AppConfig, ConfigError, LoadOptions, LogFormat, LoggingConfig};

pub struct Application {
    pub config: AppConfig,
    pub carte: CartePizzeria,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("logging initialization failed: {0}")]
    Logging(String),
}

/// Installs the global `tracing` subscriber. Fails if one is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), BootstrapError> {
    let log_level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(log_level);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|error| BootstrapError::Logging(error.to_string()))
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    let carte = CartePizzeria::with_currency_symbol(config.display.currency_symbol.clone());
    info!(
        event_name = "system.bootstrap.carte_ready",
        currency_symbol = %carte.currency_symbol(),
        "empty carte created"
    );

    Application { config, carte }
}
