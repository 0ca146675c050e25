//! Path following algorithms.
//!
//! This module provides the pure pursuit lookahead solver and the point-mass
//! follower that consumes its output.
//!
//! # Example
//!
//! ```
//! use pursuit_sim::motion::pursuit::{
//!     lookahead_point,
//!     geo::{Circle, Path, Point},
//! };
//!
//! let path = Path::from_vec(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
//! let target = lookahead_point(&path, Circle::new(90.0, 0.0, 20.0));
//! assert_eq!(target, Some(Point::new(100.0, 0.0)));
//! ```

/// Pure pursuit path following.
///
/// Finds the lookahead point on a path for a circle around the follower,
/// preferring the end of the path once it is in reach.
pub mod pursuit;
