use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` wins over the configured
/// level.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init(cfg: &LoggingConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.level))?
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
