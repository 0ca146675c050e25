//! Pure pursuit path following.
//!
//! This module implements the lookahead side of pure pursuit: a circle is
//! drawn around the follower and the path point where that circle crosses
//! the path, as far along the path as possible, becomes the target. The
//! follower then takes one fixed-length step toward it.
//!
//! # Algorithm Overview
//!
//! 1. Draw a circle centered on the follower with radius = lookahead distance.
//! 2. Intersect the circle with every path segment, keeping the forward
//!    intersection of the last segment that has one.
//! 3. If the end of the path is inside the circle, target the end instead.
//! 4. Step toward the target by the follower's speed.
//!
//! # Example
//!
//! ```
//! use pursuit_sim::motion::pursuit::{
//!     Follower, lookahead_point,
//!     geo::{Circle, Path, Point},
//! };
//!
//! let path = Path::from_vec(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
//! let mut follower = Follower::new(Point::new(40.0, 0.0), 2.5);
//!
//! let target = lookahead_point(&path, Circle::around(follower.position(), 20.0));
//! assert_eq!(target, Some(Point::new(60.0, 0.0)));
//!
//! follower.move_toward(Point::new(60.0, 0.0));
//! assert_eq!(follower.position(), Point::new(42.5, 0.0));
//! ```

/// Lookahead point calculations.
mod algorithm;

/// Geometry primitives for path definition.
///
/// Provides `Point`, `Line`, `Path`, and `Circle` types
/// used by the pursuit algorithm.
pub mod geo;

pub use algorithm::lookahead_point;

/// A point-mass that chases lookahead points.
///
/// The follower has no heading or turning constraints. Each call to
/// [`move_toward`](Follower::move_toward) moves it a fixed distance straight
/// at the given target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    position: geo::Point,
    speed:    f64,
}

impl Follower {
    /// Creates a follower at `position` that moves `speed` units per step.
    pub const fn new(position: geo::Point, speed: f64) -> Self { Self { position, speed } }

    /// Moves the follower `speed` units toward `target`.
    ///
    /// A target exactly on the current position leaves the follower where it
    /// is. The step is not shortened when the target is closer than `speed`,
    /// so the follower may pass it.
    ///
    /// # Arguments
    ///
    /// * `target` - The point to move toward, usually the current lookahead point.
    pub fn move_toward(&mut self, target: geo::Point) {
        let offset_x = target.x - self.position.x;
        let offset_y = target.y - self.position.y;
        let dist = (offset_x * offset_x + offset_y * offset_y).sqrt();
        if dist == 0.0 {
            return;
        }
        self.position.x += offset_x / dist * self.speed;
        self.position.y += offset_y / dist * self.speed;
    }

    /// Returns the current position.
    pub const fn position(&self) -> geo::Point { self.position }

    /// Returns the distance moved per step.
    pub const fn speed(&self) -> f64 { self.speed }
}

#[cfg(test)]
mod tests {
    use super::{Follower, geo::Point};

    #[test]
    fn move_toward_test_basic() {
        let mut follower = Follower::new(Point::new(0.0, 0.0), 2.5);
        follower.move_toward(Point::new(10.0, 0.0));
        assert_eq!(follower.position(), Point::new(2.5, 0.0));
    }

    #[test]
    fn move_toward_test_adv() {
        let mut follower = Follower::new(Point::new(1.0, 1.0), 5.0);
        follower.move_toward(Point::new(4.0, 5.0));
        let tolerance = 1e-12;
        assert!((follower.position().x - 4.0).abs() < tolerance);
        assert!((follower.position().y - 5.0).abs() < tolerance);
    }

    #[test]
    fn move_toward_test_same_point() {
        let start = Point::new(12.0, -7.5);
        let mut follower = Follower::new(start, 2.5);
        follower.move_toward(start);
        assert_eq!(follower.position(), start);
        assert!(!follower.position().x.is_nan() && !follower.position().y.is_nan());
    }

    #[test]
    fn move_toward_test_overshoot() {
        let mut follower = Follower::new(Point::new(0.0, 0.0), 2.5);
        follower.move_toward(Point::new(0.0, -1.0));
        assert_eq!(follower.position(), Point::new(0.0, -2.5));
    }

    #[test]
    fn speed_test() {
        assert_eq!(Follower::new(Point::new(0.0, 0.0), 3.0).speed(), 3.0);
    }
}
