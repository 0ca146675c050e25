//! Logger implementation for simulation runs.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to stderr and, when a path is given, to a log file.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```no_run
//! use pursuit_sim::fs::logger;
//! use log::{info, warn, error, LevelFilter};
//!
//! logger::init(LevelFilter::Debug, Some("pursuit.log".as_ref())).expect("Logger init failed");
//!
//! info!("Program started");
//! warn!("This is a warning");
//! error!("This is an error");
//! ```
//!
//! # Log Output
//!
//! Each log entry includes:
//! - Log level (TRACE, DEBUG, INFO, WARN, ERROR)
//! - Timestamp (time since the logger was initialized)
//! - Target (module path)
//! - Message
//!
//! Example output:
//! ```text
//! INFO [12ms 301us] pursuit_sim::sim - Follower created at (0, 0)
//! INFO [1s 2ms] pursuit_sim::sim - Follower arrived at (100, 0)
//! ```

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
    sync::{Mutex, OnceLock},
    time::{Duration, Instant},
};

use humantime::{FormattedDuration, format_duration};
use log::{LevelFilter, Metadata, Record, SetLoggerError, warn};

/// A dual-output logger.
///
/// Writes log messages to stderr and, optionally, to a file. The file is
/// created/truncated when the logger is initialized.
pub struct SimLogger {
    /// Moment the logger was created; timestamps are relative to it.
    started:     Instant,
    /// Buffered file writer for log output.
    ///
    /// `None` when no file was requested or it could not be opened.
    file_writer: Mutex<Option<BufWriter<File>>>,
}

impl SimLogger {
    fn new(file: Option<&Path>) -> (Self, Option<std::io::Error>) {
        let opened = file.map(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
        });
        let (file_writer, error) = match opened {
            Some(Ok(f)) => (Some(BufWriter::new(f)), None),
            Some(Err(e)) => (None, Some(e)),
            None => (None, None),
        };

        let logger = Self {
            started:     Instant::now(),
            file_writer: Mutex::new(file_writer),
        };
        (logger, error)
    }

    fn elapsed(&self) -> FormattedDuration { format_duration(truncate(self.started.elapsed())) }
}

/// Drops sub-microsecond precision so timestamps stay short.
fn truncate(dur: Duration) -> Duration { Duration::from_micros(dur.as_micros() as u64) }

impl log::Log for SimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_line = format!(
                "{} [{}] {} - {}\n",
                record.level(),
                self.elapsed(),
                record.target(),
                record.args()
            );

            eprint!("{}", log_line);

            if let Ok(mut writer_guard) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer_guard {
                    let _ = writer.write_all(log_line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<SimLogger> = OnceLock::new();

/// Initializes the global logger.
///
/// This function must be called once before any logging macros are used.
/// If `file` cannot be opened, logging continues on stderr only and a
/// warning is logged.
///
/// # Arguments
///
/// * `level` - The minimum log level to record. Messages below this level
///   will be ignored.
/// * `file` - Optional log file, truncated on open.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set. The logger is
/// built only on the first call, so a later call does not open `file` and
/// leaves the existing sinks and level in place.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), SetLoggerError> {
    let mut open_error = None;
    let logger = LOGGER.get_or_init(|| {
        let (logger, error) = SimLogger::new(file);
        open_error = error;
        logger
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))?;
    if let Some(e) = open_error {
        warn!("Could not open log file: {}", e);
    }
    Ok(())
}
