//! Step-wise pursuit simulation.
//!
//! [`Simulation`] owns everything a pursuit session needs: the recorded
//! path, the lookahead distance, the follower and its trail. A front end
//! drives it one frame at a time:
//!
//! 1. Apply any [`Command`]s (or feed raw input through [`Simulation::step`]).
//! 2. Call [`Simulation::tick`] with whether advance is held.
//! 3. Draw the [`Frame`] returned by [`Simulation::frame`].
//!
//! # Example
//!
//! ```
//! use pursuit_sim::{
//!     config::SimConfig,
//!     motion::pursuit::geo::Point,
//!     sim::{Command, Simulation, TickOutcome},
//! };
//!
//! let mut sim = Simulation::new(SimConfig::default())?;
//! sim.apply(Command::RecordPoint(Point::new(0.0, 0.0)));
//! sim.apply(Command::RecordPoint(Point::new(100.0, 0.0)));
//! sim.apply(Command::BeginFollow);
//!
//! let mut ticks = 0;
//! while !matches!(sim.tick(true), TickOutcome::Arrived { .. }) {
//!     ticks += 1;
//! }
//! assert_eq!(ticks, 40);
//! # Ok::<(), pursuit_sim::config::ConfigError>(())
//! ```

mod command;
mod frame;

pub use command::Command;
pub use frame::{Frame, TickOutcome};
use log::{debug, info, trace};

use crate::{
    config::{ConfigError, SimConfig},
    motion::pursuit::{
        Follower,
        geo::{Circle, Path, Point},
        lookahead_point,
    },
    opcontrol::controller::{Controls, InputState},
};

/// Scale applied to the follower-to-target distance before comparing it with
/// the stop distance.
pub const ARRIVAL_SCALE: f64 = 2.0;

/// A single-threaded pursuit session.
#[derive(Debug, Clone)]
pub struct Simulation {
    config:    SimConfig,
    path:      Path,
    trail:     Vec<Point>,
    follower:  Option<Follower>,
    lookahead: f64,
    probe:     Option<Point>,
}

impl Simulation {
    /// Creates an empty session.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not validate.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            path: Path::new(),
            trail: Vec::new(),
            follower: None,
            lookahead: config.initial_lookahead,
            probe: None,
        })
    }

    /// Applies one discrete command.
    pub fn apply(&mut self, command: Command) {
        debug!("Command {:?}", command);
        match command {
            Command::Reset => {
                self.path.clear();
                self.trail.clear();
                self.follower = None;
                info!("Simulation reset");
            }
            Command::BeginFollow => match self.path.first() {
                Some(start) => {
                    self.trail.clear();
                    self.follower = Some(Follower::new(start, self.config.follower_speed));
                    info!("Follower created at {}", start);
                }
                None => debug!("Ignoring begin-follow on an empty path"),
            },
            Command::IncreaseLookahead => {
                self.lookahead += self.config.lookahead_delta;
                debug!("Lookahead distance now {}", self.lookahead);
            }
            Command::DecreaseLookahead => {
                let delta = self.config.lookahead_delta;
                self.lookahead = delta.max(self.lookahead - delta);
                debug!("Lookahead distance now {}", self.lookahead);
            }
            Command::RecordPoint(point) => self.path.add(point),
        }
    }

    /// Runs one tick of the pursuit loop.
    ///
    /// The arrival check runs on every tick that has a target. The follower
    /// only moves when `advance` is set, and at most once per call.
    ///
    /// # Arguments
    ///
    /// * `advance` - Whether the advance input is held this tick.
    pub fn tick(&mut self, advance: bool) -> TickOutcome {
        let Some(follower) = self.follower.as_mut() else {
            return TickOutcome::Idle;
        };
        let position = follower.position();
        let Some(target) = lookahead_point(&self.path, Circle::around(position, self.lookahead))
        else {
            trace!("No lookahead point from {}", position);
            return TickOutcome::NoTarget;
        };

        if ARRIVAL_SCALE * position.dist(target) < self.config.stop_distance {
            self.follower = None;
            info!("Follower arrived at {}", position);
            return TickOutcome::Arrived { at: position };
        }
        if !advance {
            return TickOutcome::Holding { target };
        }

        self.trail.push(position);
        follower.move_toward(target);
        let to = follower.position();
        trace!("Follower moved {} -> {} toward {}", position, to, target);
        TickOutcome::Moved {
            from: position,
            to,
            target,
        }
    }

    /// Maps one frame of raw input to commands, then ticks.
    ///
    /// A recorded click is applied before keyed commands, and keyed commands
    /// run in the order reset, begin, increase, decrease.
    pub fn step(&mut self, controls: &Controls, input: &InputState) -> TickOutcome {
        for command in controls.commands(input) {
            self.apply(command);
        }
        self.probe = input.probe;
        self.tick(controls.advance_held(input))
    }

    /// Sets or clears the probe cursor shown in [`Frame::probe`].
    pub fn set_probe(&mut self, probe: Option<Point>) { self.probe = probe; }

    /// Takes a display snapshot of the current state.
    pub fn frame(&self) -> Frame {
        let follower = self.follower.map(|f| f.position());
        let lookahead = follower.and_then(|pos| self.lookahead_from(pos));
        let arrival_ring = follower
            .zip(lookahead)
            .map(|(pos, target)| ARRIVAL_SCALE * pos.dist(target));
        let probe = self
            .probe
            .and_then(|cursor| self.lookahead_from(cursor).map(|target| (cursor, target)));

        Frame {
            path: self.path.waypoints.clone(),
            trail: self.trail.clone(),
            follower,
            lookahead,
            radius: self.lookahead,
            arrival_ring,
            probe,
        }
    }

    fn lookahead_from(&self, center: Point) -> Option<Point> {
        lookahead_point(&self.path, Circle::around(center, self.lookahead))
    }

    /// The recorded path.
    pub fn path(&self) -> &Path { &self.path }

    /// Positions the follower left, one per step.
    pub fn trail(&self) -> &[Point] { &self.trail }

    /// The follower, if one is active.
    pub fn follower(&self) -> Option<&Follower> { self.follower.as_ref() }

    /// The current lookahead distance.
    pub fn lookahead(&self) -> f64 { self.lookahead }

    /// The configuration this session was created with.
    pub fn config(&self) -> &SimConfig { &self.config }
}
