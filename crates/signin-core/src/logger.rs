use crate::LoggerError;

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use signin_config::LoggingConfig;

/// Install the process-wide logger.
///
/// `config.file` = None logs to stdout (colored when `config.colored`),
/// Some logs plain lines to that file. Fails if a logger is already installed.
pub fn initialize(config: &LoggingConfig) -> Result<(), LoggerError> {
    let level_filter = config.level.0;
    let log_file = config.file.as_ref().map(PathBuf::from);

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if let Some(ref log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| LoggerError::log_file(log_path.clone(), e))?;

        Dispatch::new()
            .format(|out, message, record| {
                write_line(out, message, record.level(), record.target())
            })
            .chain(file)
    } else if config.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, message, colors.color(record.level()), record.target())
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                write_line(out, message, record.level(), record.target())
            })
            .chain(std::io::stdout())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| LoggerError::install(e.to_string()))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

/// `[<rfc3339> - <LEVEL>] <message> [<target>]`
fn write_line(out: FormatCallback, message: &Arguments, level: impl Display, target: &str) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{target}]",
        date = humantime::format_rfc3339(SystemTime::now()),
    ))
}
