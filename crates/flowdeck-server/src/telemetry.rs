//! Logging setup.
//!
//! Events go to stdout (filtered by `RUST_LOG` or `--log-level`) and to the
//! three log files the dashboard tails:
//!
//! - `o-server.log`: every INFO+ event except HTTP traces
//! - `orchestration_logic.log`: flow trigger and scheduler events
//! - `access.log`: HTTP request traces from `tower_http`
//!
//! File lines look like `2024-01-01 10:00:00,123 - target - INFO - message`,
//! which is exactly the preamble the log tail renderer strips.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use flowdeck_core::{LogLevel, LogSource};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Target prefix of the flow module's events.
const FLOW_TARGET: &str = "flowdeck_core::flow";

/// Target prefix of HTTP request traces.
const HTTP_TARGET: &str = "tower_http";

/// `<date time,ms> - <target> - <LEVEL> - <fields>` event format.
///
/// Level names follow [`LogLevel`], so WARN is written as `WARNING` and TRACE
/// as `DEBUG`.
pub struct PreambleFormat;

impl<S, N> FormatEvent<S, N> for PreambleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            metadata.target(),
            LogLevel::from(metadata.level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

type FileLayer<S> = fmt::Layer<S, DefaultFields, PreambleFormat, Mutex<File>>;

fn file_layer<S>(log_dir: &Path, source: LogSource) -> io::Result<FileLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(source.path(log_dir))?;

    Ok(fmt::layer()
        .with_ansi(false)
        .event_format(PreambleFormat)
        .with_writer(Mutex::new(file)))
}

/// Default stdout filter for a `--log-level` value.
pub fn default_filter(log_level: &str) -> String {
    format!("flowdeck_server={log_level},flowdeck_core={log_level},{HTTP_TARGET}={log_level}")
}

/// Initialise the global subscriber.
///
/// Creates `log_dir` if needed and opens the three log files for appending.
pub fn init(log_level: &str, log_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(log_dir)?;

    let stdout_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let server_file = file_layer(log_dir, LogSource::Server)?;
    let orchestration_file = file_layer(log_dir, LogSource::Orchestration)?;
    let access_file = file_layer(log_dir, LogSource::Access)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(stdout_filter))
        .with(
            server_file.with_filter(
                Targets::new()
                    .with_default(LevelFilter::INFO)
                    .with_target(HTTP_TARGET, LevelFilter::OFF),
            ),
        )
        .with(
            orchestration_file
                .with_filter(Targets::new().with_target(FLOW_TARGET, LevelFilter::INFO)),
        )
        .with(access_file.with_filter(Targets::new().with_target(HTTP_TARGET, LevelFilter::INFO)))
        .init();

    Ok(())
}
