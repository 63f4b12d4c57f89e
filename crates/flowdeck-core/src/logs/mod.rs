//! Log tail rendering.
//!
//! The dashboard polls three log files and shows the last few lines of each.
//! Every line loses its preamble (timestamp, logger name) up to the level
//! marker, and the lines are joined with `<br>` for direct embedding.

mod level;
mod source;
mod tail;

pub use level::LogLevel;
pub use source::LogSource;
pub use tail::{
    clean_line, read_log_file, render_tail, tail_log, TailOptions, DEFAULT_TAIL_LINES, LINE_BREAK,
    LOG_UNAVAILABLE,
};
