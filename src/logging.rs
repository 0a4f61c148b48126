use color_eyre::{eyre::eyre, Result};
use tracing_subscriber::{fmt, fmt::time::ChronoLocal, EnvFilter};

/// Initialize the logging system for the app.
///
/// Records from the `log` macros are forwarded to a `tracing-subscriber`
/// formatter on stderr, keeping stdout free for robot reports.
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn setup_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!(e))?;

    log::info!("Logger initialized at level {}", level);
    Ok(())
}
