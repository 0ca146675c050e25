use serde::{Deserialize, Serialize};

use crate::motion::pursuit::geo::Point;

/// What happened to the follower during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TickOutcome {
    /// There is no follower.
    Idle,
    /// The follower exists but the lookahead circle finds no target.
    NoTarget,
    /// The follower reached its target and was removed.
    Arrived {
        /// Where the follower stopped.
        at: Point,
    },
    /// A target exists but advance was not held.
    Holding {
        /// The lookahead point for this tick.
        target: Point,
    },
    /// The follower took one step.
    Moved {
        /// Position before the step.
        from:   Point,
        /// Position after the step.
        to:     Point,
        /// The lookahead point it moved toward.
        target: Point,
    },
}

/// Read-only snapshot of the simulation for display.
///
/// Everything is copied out, so a frame stays valid while the simulation
/// keeps running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The recorded path, in order.
    pub path:         Vec<Point>,
    /// Positions the follower left, one per step.
    pub trail:        Vec<Point>,
    /// Current follower position, if there is one.
    pub follower:     Option<Point>,
    /// Current follower lookahead point, if there is one.
    pub lookahead:    Option<Point>,
    /// Current lookahead distance.
    pub radius:       f64,
    /// Diameter of the ring compared against the stop distance.
    pub arrival_ring: Option<f64>,
    /// Probe cursor and the lookahead point seen from it.
    pub probe:        Option<(Point, Point)>,
}
