//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flowdeck_core::auth::DEFAULT_TOKEN_TTL;
use flowdeck_core::flow::{DEFAULT_FLOW_INTERVAL, DEFAULT_FLOW_TIMEOUT};

/// Default address to listen on.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Default directory holding the dashboard's log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Longest accepted session token lifetime, in minutes (one year).
pub const MAX_TOKEN_TTL_MINS: u64 = 60 * 24 * 365;

/// Flowdeck server command line arguments.
///
/// The session secret and the user table come from the environment
/// (`FLOWDECK_JWT_SECRET`, `FLOWDECK_USERS`), never from the command line.
#[derive(Debug, Parser)]
#[command(name = "flowdeck-server")]
#[command(version, about = "Flowdeck operations dashboard")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Directory for the server, orchestration and access logs.
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Seconds between scheduled flow runs. Set to 0 to disable the scheduler.
    #[arg(long, default_value_t = DEFAULT_FLOW_INTERVAL.as_secs())]
    pub flow_interval_secs: u64,

    /// Upper bound in seconds on a single flow run.
    #[arg(long, default_value_t = DEFAULT_FLOW_TIMEOUT.as_secs())]
    pub flow_timeout_secs: u64,

    /// Session token lifetime in minutes (1 to 525600).
    #[arg(
        long,
        default_value_t = DEFAULT_TOKEN_TTL.as_secs() / 60,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TOKEN_TTL_MINS)
    )]
    pub token_ttl_mins: u64,

    /// Mark the session cookie `Secure` (enable when served over HTTPS).
    #[arg(long, default_value_t = false)]
    pub secure_cookies: bool,

    /// Log level for stdout (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Directory holding the log files.
    pub log_dir: PathBuf,
    /// Scheduling period. None disables the scheduler.
    pub flow_interval: Option<Duration>,
    /// Upper bound on a single flow run.
    pub flow_timeout: Duration,
    /// Session token lifetime.
    pub token_ttl: Duration,
    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Set the log directory.
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Enable or disable the `Secure` cookie attribute.
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Check if the flow scheduler is enabled.
    pub fn has_scheduler(&self) -> bool {
        self.flow_interval.is_some()
    }
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        let flow_interval = if args.flow_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.flow_interval_secs))
        };

        Self {
            listen_addr: args.listen.clone(),
            log_dir: args.log_dir.clone(),
            flow_interval,
            flow_timeout: Duration::from_secs(args.flow_timeout_secs),
            token_ttl: Duration::from_secs(args.token_ttl_mins.saturating_mul(60)),
            secure_cookies: args.secure_cookies,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            flow_interval: Some(DEFAULT_FLOW_INTERVAL),
            flow_timeout: DEFAULT_FLOW_TIMEOUT,
            token_ttl: DEFAULT_TOKEN_TTL,
            secure_cookies: false,
        }
    }
}
