use std::{env, io::Write, sync::Once};

use chrono::{
    format::{DelayedFormat, StrftimeItems},
    Local,
};
use env_logger::{fmt::Formatter, Builder as EnvLoggerBuilder};
use log::{LevelFilter, Record};

use crate::errors::error::{TestUtilsError, TestUtilsResult};

static TEST_LOGGING_INIT: Once = Once::new();

/// Installs the test logger once per process. Does nothing unless `RUST_LOG` is set.
pub fn init_logger() {
    TEST_LOGGING_INIT.call_once(|| {
        IssuanceTestLogger::init_testing_logger();
    })
}

#[derive(Debug)]
pub struct IssuanceTestLogger;

fn _get_timestamp<'a>() -> DelayedFormat<StrftimeItems<'a>> {
    Local::now().format("%Y-%m-%d %H:%M:%S.%f")
}

fn text_format(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let style = buf.default_level_style(record.level());
    writeln!(
        buf,
        "{}|{style}{:>5}{style:#}|{:<30}|{:>35}:{:<4}| {}",
        _get_timestamp(),
        record.level(),
        record.target(),
        record.file().unwrap_or_default(),
        record.line().unwrap_or_default(),
        record.args()
    )
}

fn text_no_color_format(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(
        buf,
        "{}|{:>5}|{:<30}|{:>35}:{:<4}| {}",
        _get_timestamp(),
        record.level(),
        record.target(),
        record.file().unwrap_or_default(),
        record.line().unwrap_or_default(),
        record.args()
    )
}

impl IssuanceTestLogger {
    pub fn init_testing_logger() {
        if let Ok(log_pattern) = env::var("RUST_LOG") {
            if let Err(err) = IssuanceTestLogger::init(Some(log_pattern)) {
                eprintln!("Failed to initialize test logger: {err}");
            }
        }
    }

    /// `RUST_LOG_FORMATTER=text_no_color` drops the level colouring.
    pub fn init(pattern: Option<String>) -> TestUtilsResult<()> {
        let pattern = pattern.or(env::var("RUST_LOG").ok());
        let formatter = match env::var("RUST_LOG_FORMATTER") {
            Ok(val) => match val.as_str() {
                "text_no_color" => text_no_color_format,
                _ => text_format,
            },
            _ => text_format,
        };
        EnvLoggerBuilder::new()
            .format(formatter)
            .filter(None, LevelFilter::Off)
            .parse_filters(pattern.as_deref().unwrap_or("warn"))
            .try_init()
            .map_err(|err| {
                TestUtilsError::LoggingError(format!("Cannot init logger: {:?}", err))
            })?;
        Ok(())
    }
}
