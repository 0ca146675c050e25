//! Operator input handling for interactive sessions.
//!
//! This module simplifies mapping keyboard and pointer input to simulation
//! commands for whatever front end draws the session.
//!
//! # Features
//!
//! - **Key-to-command mapping**: Reset, begin-follow and lookahead changes on
//!   key press.
//! - **Hold-to-advance**: The follower steps once per frame while the advance
//!   key is held.
//! - **Pointer input**: Record path points and probe lookahead points.
//!
//! # Example
//!
//! ```
//! use pursuit_sim::{
//!     config::SimConfig,
//!     opcontrol::controller::{Controls, InputState},
//!     sim::Simulation,
//! };
//!
//! let controls = Controls::default();
//! let mut sim = Simulation::new(SimConfig::default())?;
//!
//! // One call per rendered frame.
//! let outcome = sim.step(&controls, &InputState::default().hold('f'));
//! # let _ = outcome;
//! # Ok::<(), pursuit_sim::config::ConfigError>(())
//! ```

/// Input mapping utilities.
///
/// Provides [`Controls`](controller::Controls) for mapping
/// [`InputState`](controller::InputState) frames to commands.
pub mod controller;
