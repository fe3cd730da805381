//! Logger set-up.

use crate::error::Result;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "PRACTICE3D_LOG";

/// Installs a `fern` logger writing timestamped lines to stderr.
pub fn init(level: log::LevelFilter) -> Result<()> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(level);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
