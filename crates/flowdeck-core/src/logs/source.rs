//! The log files exposed on the dashboard.

use std::path::{Path, PathBuf};

/// One of the three logs the dashboard polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogSource {
    /// Everything the server logs.
    Server,
    /// Flow trigger and scheduler activity.
    Orchestration,
    /// HTTP request traces.
    Access,
}

impl LogSource {
    /// All sources.
    pub fn all() -> &'static [LogSource] {
        &[LogSource::Server, LogSource::Orchestration, LogSource::Access]
    }

    /// File name inside the log directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            LogSource::Server => "o-server.log",
            LogSource::Orchestration => "orchestration_logic.log",
            LogSource::Access => "access.log",
        }
    }

    /// Path segment under `/logs/` that serves this source.
    pub fn slug(&self) -> &'static str {
        match self {
            LogSource::Server => "server",
            LogSource::Orchestration => "oLogic",
            LogSource::Access => "uvicorn",
        }
    }

    /// Full path of this source's file in `log_dir`.
    pub fn path(&self, log_dir: &Path) -> PathBuf {
        log_dir.join(self.file_name())
    }
}
