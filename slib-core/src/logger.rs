//! Leveled logging context.
//!
//! [`Logger`] is an explicitly constructed value that owns its output sink
//! (anything implementing [`core::fmt::Write`]) and its level filter. There is
//! no process-wide instance and no internal locking: pass the logger to the
//! code that needs it, and wrap it in a mutex yourself if it is shared across
//! threads.
//!
//! Lines are formatted as
//!
//! ```text
//! [ Info]: message
//! [ Warn]:     indented message (two spaces per indent step)
//! [Error]: message: src/file.rs(12:5)
//! ```
//!
//! The kernel's own diagnostics go through the `log` facade instead; a
//! [`log::Level`] converts into a [`Level`] for applications that forward
//! records from one to the other.
//!
//! ```
//! use slib_core::logger::{Level, Logger};
//!
//! let mut logger = Logger::with_level(String::new(), Level::Info);
//! logger.info(format_args!("ready")).unwrap();
//! logger.trace(format_args!("dropped")).unwrap();
//! assert_eq!(logger.into_inner(), "[ Info]: ready\n");
//! ```

use core::fmt::{self, Arguments, Write};
use core::panic::Location;

/// Severity of a log line, most severe first.
///
/// A logger at level `L` emits every line whose level is `<= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Unrecoverable failure.
    Fatal,
    /// Operation failed.
    Error,
    /// Suspicious but recoverable condition.
    Warning,
    /// Normal progress.
    Info,
    /// Detailed tracing.
    Trace,
}

impl Level {
    /// Five-character label used in the line prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Fatal => "Fatal",
            Level::Error => "Error",
            Level::Warning => " Warn",
            Level::Info => " Info",
            Level::Trace => "Trace",
        }
    }

    /// `Trace` in builds with debug assertions, `Info` otherwise.
    pub const fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Level::Trace
        } else {
            Level::Info
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::build_default()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_start())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Trace,
        }
    }
}

/// Leveled logger writing to an owned sink.
#[derive(Debug)]
pub struct Logger<W: Write> {
    sink: W,
    level: Level,
}

impl<W: Write> Logger<W> {
    /// Creates a logger at [`Level::build_default`].
    pub fn new(sink: W) -> Self {
        Self::with_level(sink, Level::build_default())
    }

    /// Creates a logger with an explicit level.
    pub fn with_level(sink: W, level: Level) -> Self {
        Self { sink, level }
    }

    /// Current level filter.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Replaces the level filter.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Whether a line at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Borrows the sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the logger and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Writes one line at `level`, indented by `indent` steps of two spaces.
    ///
    /// Lines above the current level are dropped and report `Ok(())`.
    pub fn log(&mut self, level: Level, message: Arguments<'_>, indent: u32) -> fmt::Result {
        if !self.enabled(level) {
            return Ok(());
        }
        write!(self.sink, "[{}]: ", level.label())?;
        for _ in 0..indent {
            self.sink.write_str("  ")?;
        }
        self.sink.write_fmt(message)?;
        self.sink.write_char('\n')
    }

    /// Writes one line at `level` followed by the caller's source location.
    #[track_caller]
    pub fn log_with_location(&mut self, level: Level, message: Arguments<'_>) -> fmt::Result {
        let location = Location::caller();
        self.log(
            level,
            format_args!(
                "{}: {}({}:{})",
                message,
                location.file(),
                location.line(),
                location.column()
            ),
            0,
        )
    }

    /// [`Level::Trace`] line.
    pub fn trace(&mut self, message: Arguments<'_>) -> fmt::Result {
        self.log(Level::Trace, message, 0)
    }

    /// [`Level::Info`] line.
    pub fn info(&mut self, message: Arguments<'_>) -> fmt::Result {
        self.log(Level::Info, message, 0)
    }

    /// [`Level::Warning`] line.
    pub fn warn(&mut self, message: Arguments<'_>) -> fmt::Result {
        self.log(Level::Warning, message, 0)
    }

    /// [`Level::Error`] line with the caller's location.
    #[track_caller]
    pub fn error(&mut self, message: Arguments<'_>) -> fmt::Result {
        self.log_with_location(Level::Error, message)
    }

    /// [`Level::Fatal`] line with the caller's location.
    #[track_caller]
    pub fn fatal(&mut self, message: Arguments<'_>) -> fmt::Result {
        self.log_with_location(Level::Fatal, message)
    }
}
