use serde::{Deserialize, Serialize};

use crate::motion::pursuit::geo::Point;

/// A discrete request from the front end.
///
/// Advancing the follower is not a command: it is a level that the front
/// end passes to [`Simulation::tick`](super::Simulation::tick) every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Clear the path, the trail and the follower.
    Reset,
    /// Put a new follower on the first path point. Ignored on an empty path.
    BeginFollow,
    /// Grow the lookahead distance by one delta.
    IncreaseLookahead,
    /// Shrink the lookahead distance by one delta, never below the delta.
    DecreaseLookahead,
    /// Append a point to the end of the path.
    RecordPoint(Point),
}
