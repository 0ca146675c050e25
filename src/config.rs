//! Simulation tuning values.
//!
//! All values have defaults that give a smooth chase on a canvas a few
//! hundred units across. Any subset can be supplied through serde; missing
//! fields fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use pursuit_sim::config::SimConfig;
//!
//! let config = SimConfig {
//!     follower_speed: 4.0,
//!     ..SimConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

/// Tuning values for a [`Simulation`](crate::sim::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Distance the follower moves on each accepted step.
    pub follower_speed:    f64,
    /// The follower stops once twice its distance to the lookahead point
    /// falls below this value.
    pub stop_distance:     f64,
    /// Step used by the increase and decrease commands. Also the smallest
    /// lookahead distance the decrease command can reach.
    pub lookahead_delta:   f64,
    /// Lookahead distance at startup.
    pub initial_lookahead: f64,
}

/// Errors reported by [`SimConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Speed must be finite and positive.
    #[error("follower speed must be a positive number, got {0}")]
    FollowerSpeed(f64),

    /// Stop distance must be finite and not negative.
    #[error("stop distance must be zero or more, got {0}")]
    StopDistance(f64),

    /// Delta must be finite and positive.
    #[error("lookahead delta must be a positive number, got {0}")]
    LookaheadDelta(f64),

    /// Initial lookahead must be finite and at least the delta.
    #[error("initial lookahead {lookahead} must be at least the lookahead delta {delta}")]
    InitialLookahead {
        /// The rejected lookahead.
        lookahead: f64,
        /// The configured delta.
        delta:     f64,
    },
}

impl SimConfig {
    /// Default distance per step.
    pub const DEFAULT_FOLLOWER_SPEED: f64 = 2.5;
    /// Default arrival threshold.
    pub const DEFAULT_STOP_DISTANCE: f64 = 2.0;
    /// Default lookahead increment.
    pub const DEFAULT_LOOKAHEAD_DELTA: f64 = 2.5;
    /// Default starting lookahead.
    pub const DEFAULT_INITIAL_LOOKAHEAD: f64 = 45.0;

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.follower_speed.is_finite() && self.follower_speed > 0.0) {
            return Err(ConfigError::FollowerSpeed(self.follower_speed));
        }
        if !(self.stop_distance.is_finite() && self.stop_distance >= 0.0) {
            return Err(ConfigError::StopDistance(self.stop_distance));
        }
        if !(self.lookahead_delta.is_finite() && self.lookahead_delta > 0.0) {
            return Err(ConfigError::LookaheadDelta(self.lookahead_delta));
        }
        if !(self.initial_lookahead.is_finite() && self.initial_lookahead >= self.lookahead_delta)
        {
            return Err(ConfigError::InitialLookahead {
                lookahead: self.initial_lookahead,
                delta:     self.lookahead_delta,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            follower_speed:    Self::DEFAULT_FOLLOWER_SPEED,
            stop_distance:     Self::DEFAULT_STOP_DISTANCE,
            lookahead_delta:   Self::DEFAULT_LOOKAHEAD_DELTA,
            initial_lookahead: Self::DEFAULT_INITIAL_LOOKAHEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let base = SimConfig::default();
        let speed = SimConfig {
            follower_speed: 0.0,
            ..base
        };
        assert_eq!(speed.validate(), Err(ConfigError::FollowerSpeed(0.0)));

        let stop = SimConfig {
            stop_distance: -1.0,
            ..base
        };
        assert_eq!(stop.validate(), Err(ConfigError::StopDistance(-1.0)));

        let delta = SimConfig {
            lookahead_delta: f64::INFINITY,
            ..base
        };
        assert_eq!(delta.validate(), Err(ConfigError::LookaheadDelta(f64::INFINITY)));

        let lookahead = SimConfig {
            initial_lookahead: 1.0,
            ..base
        };
        assert_eq!(
            lookahead.validate(),
            Err(ConfigError::InitialLookahead {
                lookahead: 1.0,
                delta:     2.5,
            })
        );
    }

    #[test]
    fn validate_rejects_nan() {
        let config = SimConfig {
            follower_speed: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::FollowerSpeed(_))));
    }

    #[test]
    fn deserialize_partial() {
        let config: SimConfig = serde_json::from_str(r#"{"follower_speed": 4.0}"#).unwrap();
        assert_eq!(config, SimConfig {
            follower_speed: 4.0,
            ..SimConfig::default()
        });
    }

    #[test]
    fn error_message() {
        let err = ConfigError::StopDistance(-1.0);
        assert_eq!(err.to_string(), "stop distance must be zero or more, got -1");
    }
}
