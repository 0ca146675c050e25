//! Geometry primitives for path definition and lookahead queries.
//!
//! This module provides the plain value types shared by the lookahead
//! solver, the follower and the simulation.
//!
//! # Types
//!
//! - `Point`: A 2D point with x and y coordinates.
//! - `Line`: A segment between two consecutive path points.
//! - `Path`: An ordered sequence of points forming a polyline.
//! - `Circle`: The lookahead query, a center and a radius.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A 2D point in the simulation plane.
///
/// Used for path points, the follower position and lookahead points.
///
/// # Example
///
/// ```
/// use pursuit_sim::motion::pursuit::geo::Point;
///
/// let waypoint = Point::new(24.0, 12.0);
/// assert_eq!(waypoint.dist(Point::new(24.0, 0.0)), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

/// An ordered sequence of points forming a polyline.
///
/// Insertion order is traversal order. A path with fewer than two points
/// has no segments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// The ordered list of points.
    pub waypoints: Vec<Point>,
}

/// A segment between two consecutive path points.
///
/// Not an infinite line, only the piece between `point1` and `point2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The starting point of the segment.
    pub point1: Point,
    /// The ending point of the segment.
    pub point2: Point,
}

/// A circle defined by center coordinates and radius.
///
/// Used as the lookahead query: centered on the follower, radius equal to the
/// lookahead distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// X-coordinate of the circle center.
    pub x: f64,
    /// Y-coordinate of the circle center.
    pub y: f64,
    /// Radius of the circle.
    pub r: f64,
}

/// Errors produced when parsing a [`Point`] from its `"x,y"` text form.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParsePointError {
    /// The input did not contain exactly two comma-separated values.
    #[error("expected `x,y`, got {0:?}")]
    Arity(String),

    /// One of the coordinates is not a number.
    #[error("invalid coordinate {value:?}: {source}")]
    Coordinate {
        /// The text that failed to parse.
        value:  String,
        /// The underlying float parse error.
        source: std::num::ParseFloatError,
    },
}

impl Point {
    /// Create a new point using `x` and `y` coordinates
    pub const fn new(x: f64, y: f64) -> Self { Point { x, y } }

    /// Euclidean distance to another point.
    pub fn dist(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParsePointError::Arity(s.to_string()));
        };
        Ok(Point::new(coordinate(x)?, coordinate(y)?))
    }
}

fn coordinate(text: &str) -> Result<f64, ParsePointError> {
    let text = text.trim();
    text.parse().map_err(|source| ParsePointError::Coordinate {
        value: text.to_string(),
        source,
    })
}

impl Path {
    /// Create an empty path
    pub const fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Create a path from a vector of points
    pub fn from_vec(waypoints: Vec<Point>) -> Self { Self { waypoints } }

    /// Add a point to the end of the path
    pub fn add(&mut self, waypoint: Point) { self.waypoints.push(waypoint); }

    /// Remove every point
    pub fn clear(&mut self) { self.waypoints.clear(); }

    /// First point, where a follower starts
    pub fn first(&self) -> Option<Point> { self.waypoints.first().copied() }

    /// Last point, the end of the path
    pub fn last(&self) -> Option<Point> { self.waypoints.last().copied() }

    /// Number of points
    pub fn len(&self) -> usize { self.waypoints.len() }

    /// Whether the path has no points
    pub fn is_empty(&self) -> bool { self.waypoints.is_empty() }

    /// Iterate over the consecutive segments of the path, in path order.
    ///
    /// Yields nothing for paths with fewer than two points.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.waypoints
            .windows(2)
            .map(|pair| Line::from_pts(pair[0], pair[1]))
    }
}

impl From<Vec<Point>> for Path {
    fn from(waypoints: Vec<Point>) -> Self { Self::from_vec(waypoints) }
}

impl Line {
    /// Create a new line from 2 coordinates
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line {
            point1: Point::new(x1, y1),
            point2: Point::new(x2, y2),
        }
    }

    /// Create a new line from 2 points
    pub const fn from_pts(point1: Point, point2: Point) -> Line { Line { point1, point2 } }

    /// Shift both endpoints so that `origin` becomes (0, 0).
    pub fn translate(self, origin: Point) -> Line {
        Line::new(
            self.point1.x - origin.x,
            self.point1.y - origin.y,
            self.point2.x - origin.x,
            self.point2.y - origin.y,
        )
    }
}

impl Circle {
    /// Create a new circle
    pub const fn new(x: f64, y: f64, r: f64) -> Circle { Circle { x, y, r } }

    /// Create a circle around `center`
    pub const fn around(center: Point, r: f64) -> Circle { Circle::new(center.x, center.y, r) }

    /// The center as a point
    pub const fn center(&self) -> Point { Point::new(self.x, self.y) }
}
