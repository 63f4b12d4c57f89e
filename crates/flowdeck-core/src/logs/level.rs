//! Log level markers recognized in log preambles.

use std::fmt;

/// Log levels whose marker ends a line's preamble.
///
/// A line such as `2024-01-01 10:00:00 - orchestration - INFO - started` is
/// cleaned to `INFO - started` when [`LogLevel::Info`] is among the enabled
/// markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Error,
    Warning,
    Debug,
}

impl LogLevel {
    /// All levels, in the order their markers are tried.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Info,
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Debug,
        ]
    }

    /// Marker text as it appears in a log line.
    pub fn marker(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl From<&tracing::Level> for LogLevel {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::ERROR => LogLevel::Error,
            tracing::Level::WARN => LogLevel::Warning,
            tracing::Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}
