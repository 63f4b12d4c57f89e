//! Tail-and-clean rendering of a log file.

use std::io;
use std::path::{Path, PathBuf};

use super::level::LogLevel;

/// Returned instead of an error when the log file does not exist yet.
pub const LOG_UNAVAILABLE: &str = "Log file not available.";

/// Number of trailing lines rendered by default.
pub const DEFAULT_TAIL_LINES: usize = 30;

/// Joins rendered lines so the fragment can be dropped straight into HTML.
pub const LINE_BREAK: &str = "<br>";

/// Separator that must follow a level marker for it to end the preamble.
const MARKER_SEPARATOR: &str = " - ";

/// How a log tail is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailOptions {
    /// Number of trailing lines kept.
    pub lines: usize,
    /// Level markers that end a line's preamble.
    pub markers: Vec<LogLevel>,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            lines: DEFAULT_TAIL_LINES,
            markers: LogLevel::all().to_vec(),
        }
    }
}

impl TailOptions {
    /// Set the number of trailing lines kept.
    pub fn with_lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Restrict the recognized level markers.
    pub fn with_markers(mut self, markers: impl IntoIterator<Item = LogLevel>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }
}

/// Strip everything before the first `<LEVEL> - ` in `line`.
///
/// The earliest position at which any of `markers` is followed by `" - "`
/// wins. Lines without such a marker are returned unchanged.
pub fn clean_line<'a>(line: &'a str, markers: &[LogLevel]) -> &'a str {
    let start = markers
        .iter()
        .filter_map(|level| {
            let marker = level.marker();
            line.match_indices(marker)
                .map(|(idx, _)| idx)
                .find(|&idx| line[idx + marker.len()..].starts_with(MARKER_SEPARATOR))
        })
        .min();

    match start {
        Some(idx) => &line[idx..],
        None => line,
    }
}

/// Split `contents` on `\n`, `\r\n` and lone `\r`.
///
/// Terminators are dropped. A final terminator does not start a new line.
fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = contents
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect();

    if contents.is_empty() || contents.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// Render the last `options.lines` lines of `contents`, cleaned and joined
/// with `<br>`.
///
/// HTML in the log messages is passed through unescaped.
pub fn render_tail(contents: &str, options: &TailOptions) -> String {
    let lines = split_lines(contents);
    let skip = lines.len().saturating_sub(options.lines);

    lines[skip..]
        .iter()
        .map(|line| clean_line(line, &options.markers))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Read `path` and render its tail.
///
/// A missing file yields [`LOG_UNAVAILABLE`]. Any other I/O failure is
/// returned. The whole file is re-read on every call; invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_log_file(path: &Path, options: &TailOptions) -> io::Result<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(LOG_UNAVAILABLE.to_string());
        }
        Err(e) => return Err(e),
    };

    Ok(render_tail(&String::from_utf8_lossy(&bytes), options))
}

/// [`read_log_file`] on the blocking thread pool.
pub async fn tail_log(path: PathBuf, options: TailOptions) -> io::Result<String> {
    tokio::task::spawn_blocking(move || read_log_file(&path, &options))
        .await
        .map_err(io::Error::other)?
}
