//! Match configuration
//!
//! Everything the host is allowed to tune lives here. Goal dimensions are
//! deliberately absent: they are regulation constants in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration, reported by [`MatchConfig::validate`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("round count must be positive")]
    InvalidRounds,
    #[error("shot timeout must be positive (got {0} s)")]
    InvalidTimeout(f32),
    #[error("max shot speed must be positive (got {0} m/s)")]
    InvalidShotSpeed(f32),
    #[error("ball radius and mass must be positive (radius {radius} m, mass {mass} kg)")]
    InvalidBall { radius: f32, mass: f32 },
    #[error("turf friction must be non-negative (got {0})")]
    InvalidFriction(f32),
    #[error("restitution must be in [0, 1] (got {0})")]
    InvalidRestitution(f32),
    #[error("keeper error must be non-negative (got {0} m)")]
    InvalidKeeperError(f32),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Match configuration
///
/// `Default` is the canonical tuning; hosts usually override only
/// `rounds`, `seed`, or `keeper_error`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Regulation rounds before sudden death
    pub rounds: u32,
    /// Seconds the shooter has to release a shot each round
    pub shot_timeout_secs: f32,

    // === Shot ===
    /// Speed ceiling for a full-power push (m/s)
    pub max_shot_speed: f32,

    // === Ball ===
    /// Ball mass (kg)
    pub ball_mass: f32,
    /// Ball radius (m)
    pub ball_radius: f32,

    // === Turf ===
    /// Linear damping coefficient for turf drag
    pub turf_friction: f32,
    /// Bounce energy retention on ground contact
    pub restitution: f32,

    // === Goalkeeper difficulty ===
    /// Half-width of the per-round lateral anticipation error (m).
    /// 0.0 keeps the keeper purely geometric; anything larger draws a
    /// deterministic offset from the seeded RNG each round.
    pub keeper_error: f32,
    /// RNG seed for reproducible matches
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            shot_timeout_secs: 8.0,

            max_shot_speed: crate::consts::MAX_SHOT_SPEED,

            ball_mass: 0.160,
            ball_radius: 0.037,

            turf_friction: 0.3,
            restitution: 0.55,

            keeper_error: 0.0,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Check the configuration before a match is allowed to start
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidRounds);
        }
        if self.shot_timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidTimeout(self.shot_timeout_secs));
        }
        if self.max_shot_speed <= 0.0 {
            return Err(ConfigError::InvalidShotSpeed(self.max_shot_speed));
        }
        if self.ball_radius <= 0.0 || self.ball_mass <= 0.0 {
            return Err(ConfigError::InvalidBall {
                radius: self.ball_radius,
                mass: self.ball_mass,
            });
        }
        if self.turf_friction < 0.0 {
            return Err(ConfigError::InvalidFriction(self.turf_friction));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        if self.keeper_error < 0.0 {
            return Err(ConfigError::InvalidKeeperError(self.keeper_error));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
