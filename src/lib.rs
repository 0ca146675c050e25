//! # pursuit-sim
//!
//! pursuit-sim is a small pure pursuit toolkit: a lookahead solver that picks
//! the point on a polyline path at a fixed distance from a follower, and a
//! headless, step-wise simulation that chases it. It provides:
//!
//! - **Lookahead Solver**: Circle/segment intersection over a whole path, with
//!   forward-biased selection and an end-of-path override.
//! - **Follower**: A point-mass that steps a fixed distance toward a target.
//! - **Simulation**: Owned session state (path, lookahead distance, follower,
//!   trail) driven one tick at a time, with display snapshots.
//! - **Operator Input**: Mapping raw key and pointer input to commands.
//! - **Logging**: A console and file logger for following runs.
//!
//! ## Quick Start
//!
//! ```
//! use pursuit_sim::{
//!     config::SimConfig,
//!     motion::pursuit::geo::Point,
//!     sim::{Command, Simulation},
//! };
//!
//! let mut sim = Simulation::new(SimConfig::default())?;
//! sim.apply(Command::RecordPoint(Point::new(0.0, 0.0)));
//! sim.apply(Command::RecordPoint(Point::new(200.0, 50.0)));
//! sim.apply(Command::BeginFollow);
//!
//! for _ in 0..10 {
//!     sim.tick(true);
//! }
//! let frame = sim.frame();
//! assert_eq!(frame.trail.len(), 10);
//! # Ok::<(), pursuit_sim::config::ConfigError>(())
//! ```
//!
//! ## Modules
//!
//! - [`motion`]: The lookahead solver, geometry types and the follower.
//! - [`sim`]: The tick-driven simulation and its commands and snapshots.
//! - [`config`]: Speeds, thresholds and lookahead tuning.
//! - [`opcontrol`]: Key and pointer input mapping.
//! - [`fs`]: Filesystem utilities including logging.

/// Simulation tuning values.
///
/// Provides [`SimConfig`](config::SimConfig) and its validation errors.
pub mod config;

/// Filesystem utilities module.
///
/// Contains logging to stderr and an optional log file.
pub mod fs;

/// Path following module.
///
/// Provides the pure pursuit lookahead solver, geometry primitives and the
/// [`Follower`](motion::pursuit::Follower).
pub mod motion;

/// Operator input module.
///
/// Maps raw key and pointer input frames to simulation commands, with
/// edge-triggered commands and a level-triggered advance key.
pub mod opcontrol;

/// Tick-driven simulation module.
///
/// Owns the path, the lookahead distance, the follower and its trail, and
/// produces display [`Frame`](sim::Frame)s.
pub mod sim;
