//! Process-wide logging setup for binaries and test harnesses built on the client.
//!
//! Library code only emits through the `log` facade. Whoever owns the process
//! calls [`initialize`] once to route those records to stdout (colored) and a
//! log file.

use crate::ErrorLocation;
use crate::LoggerError;

use std::io::stdout;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Serializes initialization attempts.
static INIT_LOGGER_LOCK: Mutex<()> = Mutex::new(());

/// Set once a dispatcher has actually been installed.
static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Log file name.
pub const LOG_FILE_NAME: &str = "http-client.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stdout + file).
///
/// Safe to call multiple times: once a logger is installed, later calls log a
/// warning and return `Ok`. A failed attempt installs nothing, so a later call
/// may retry with another directory.
///
/// # Errors
///
/// Returns [`LoggerError`] if the log file cannot be created or the
/// dispatcher cannot be installed.
pub fn initialize(log_dir: &Path) -> Result<(), LoggerError> {
    let _lock = INIT_LOGGER_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if LOGGER_INSTALLED.load(Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    initialize_internal(log_dir)?;
    LOGGER_INSTALLED.store(true, Ordering::SeqCst);
    info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");

    Ok(())
}

/// Whether a logger has been installed by [`initialize`].
pub fn is_initialized() -> bool {
    LOGGER_INSTALLED.load(Ordering::SeqCst)
}

#[track_caller]
pub(crate) fn initialize_internal(log_dir: &Path) -> Result<(), LoggerError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| LoggerError::LogFile {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Plain text for the file, colors would only add escape codes
    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    Dispatch::new()
        .level(LOG_LEVEL)
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| LoggerError::Dispatch {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
