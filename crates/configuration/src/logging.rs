use crate::error::ConfigError;
use crate::settings::Logging;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable that, when set, replaces the configured log filter.
pub const LOG_FILTER_ENV: &str = "NOVA_LOG";

/// Installs the global tracing subscriber.
///
/// Logs go to a daily rolling file under `settings.directory` so they never
/// interleave with the interactive terminal. The returned guard flushes the
/// background writer when dropped and must be held until the program exits.
pub fn init_logging(settings: &Logging) -> Result<WorkerGuard, ConfigError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(settings.file_prefix.as_str())
        .build(&settings.directory)
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}
