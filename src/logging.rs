//! Logger initialisation
//!
//! Log records go to stderr through a log4rs console appender so stdout
//! carries nothing but the report. The level comes from the
//! [`GP_BENCH_LOG`](crate::config::LOG_LEVEL_ENV) environment variable and
//! defaults to `warn`.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LOG_LEVEL_ENV;
use crate::error::BenchError;

const PATTERN: &str = "{d(%H:%M:%S%.3f)} [{l}] {t} - {m}{n}";

/// Level used when the environment does not name one
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name, case-insensitively
///
/// Unknown names fall back to [`DEFAULT_LEVEL`].
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

/// Level requested through the environment
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .map(|name| parse_level(&name))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Build the stderr logging configuration
pub fn console_config(level: LevelFilter) -> Result<Config, BenchError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| BenchError::Logging(e.to_string()))
}

/// Install the global logger at `level`
///
/// # Errors
///
/// Fails when the configuration is invalid or a logger is already
/// installed.
pub fn init(level: LevelFilter) -> Result<(), BenchError> {
    let config = console_config(level)?;
    log4rs::init_config(config).map_err(|e| BenchError::Logging(e.to_string()))?;
    Ok(())
}

/// Install the global logger at the level named by the environment
pub fn init_from_env() -> Result<(), BenchError> {
    init(level_from_env())
}
