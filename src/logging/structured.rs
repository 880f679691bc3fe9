//! Subscriber setup for the `ahms` binary
//!
//! The menu owns stdout, so human-readable events are written to stderr and only
//! `ahms` targets pass the filter; dependency noise (rustyline in particular) stays
//! out of the terminal. When `[logging] local_enabled` is set, the same events are
//! also written as JSON lines to `<local_path>/ahms.log`.

use crate::config::LoggingConfig;
use crate::domain::{AhmsError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

const LOG_FILE_NAME: &str = "ahms.log";

/// Keeps the file writer's background thread alive
///
/// Dropping it flushes whatever the JSON layer still has buffered, so `main` holds
/// it until just before `process::exit`.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Installs the global subscriber
///
/// `RUST_LOG` replaces the `ahms=<level>` filter when it is set. Can only succeed
/// once per process.
///
/// # Errors
///
/// All failures are [`AhmsError::Configuration`]: an unknown level, a log directory
/// that cannot be created, or a subscriber that is already installed.
///
/// # Example
///
/// ```no_run
/// use ahms::logging::init_logging;
/// use ahms::config::LoggingConfig;
///
/// let _guard = init_logging("warn", &LoggingConfig::default()).expect("logging");
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = target_filter(parse_log_level(log_level_str)?);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed();
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer];

    let file_guard = if config.local_enabled {
        let (layer, guard) = json_file_layer(config, filter)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| AhmsError::Configuration(format!("Failed to install logger: {e}")))?;

    tracing::debug!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

fn target_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("ahms={level}")))
}

/// JSON layer over a rolling appender in `config.local_path`, created if missing
fn json_file_layer(
    config: &LoggingConfig,
    filter: EnvFilter,
) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        AhmsError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation(&config.local_rotation),
        &config.local_path,
        LOG_FILE_NAME,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();
    Ok((layer, guard))
}

/// Config validation only admits `daily`, `hourly` and `never`
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(AhmsError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
