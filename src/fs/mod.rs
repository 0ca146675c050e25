//! Filesystem utilities.
//!
//! # Logging
//!
//! The `logger` submodule provides a logger that writes to stderr and,
//! optionally, to a log file. Useful for following a headless run tick by
//! tick.
//!
//! # Example
//!
//! ```no_run
//! use pursuit_sim::fs::logger;
//! use log::{info, LevelFilter};
//!
//! // Initialize the logger at program start
//! logger::init(LevelFilter::Debug, None).expect("Failed to initialize logger");
//!
//! // Now you can use standard logging macros
//! info!("Simulation started");
//! ```

/// Console and file logging.
///
/// Provides a logger implementation that writes to stderr and an
/// optional file.
pub mod logger;
