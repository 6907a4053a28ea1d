use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, raised by
/// each `-v`.
pub fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info,crcsum_core=debug",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("logging init: {e}"))
}
