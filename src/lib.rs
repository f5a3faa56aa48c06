//! Spot Kick - a penalty-shootout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, goalkeeper, match state)
//! - `config`: Match configuration with validation and JSON loading
//!
//! Rendering, input devices, and UI are external collaborators: they feed
//! commands into the sim and draw the per-tick [`sim::Snapshot`] it returns.

pub mod config;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use sim::{MatchState, RoundOutcome, ShotKind, Snapshot, tick};

use glam::Vec3;

/// Simulation constants
///
/// Pitch axes: x lateral (positive right of the shooter), y up, z depth.
/// The shooter stands at the origin and shoots toward negative z.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest dt a single tick will integrate; bigger frame gaps are
    /// clamped so a hitch cannot blow up the integration
    pub const MAX_TICK_DT: f32 = 1.0 / 30.0;

    /// Goal frame - regulation constants, not configurable
    pub const GOAL_WIDTH: f32 = 3.66;
    pub const GOAL_HEIGHT: f32 = 2.14;
    /// z-coordinate of the goal-line plane (the shot is taken from the
    /// origin at the top of the shooting circle)
    pub const GOAL_LINE_Z: f32 = -14.63;

    /// Gravity (m/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Speed below which a grounded ball counts as stopped (m/s)
    pub const STOP_SPEED: f32 = 0.15;

    /// Shot model
    pub const MAX_SHOT_SPEED: f32 = 31.0;
    /// Drag-flicks get a higher speed ceiling than push/scoop
    pub const DRAG_FLICK_SPEED_FACTOR: f32 = 1.15;
    /// Fixed upward component of a drag-flick (m/s)
    pub const DRAG_FLICK_LIFT: f32 = 1.5;
    /// Scoop lift per unit of power (m/s)
    pub const SCOOP_LIFT_FACTOR: f32 = 8.0;
    /// Charge accumulated per second while the charge input is held
    pub const CHARGE_RATE: f32 = 0.8;
    /// Power used when the shot is released without charging
    pub const DEFAULT_POWER: f32 = 0.5;

    /// Goalkeeper
    pub const KEEPER_HALF_WIDTH: f32 = 0.4;
    /// Lateral travel limit; the keeper never leaves the goal mouth
    pub const KEEPER_TRAVEL: f32 = GOAL_WIDTH / 2.0 - KEEPER_HALF_WIDTH;
    /// Fraction of the ball's x the keeper aims for (imperfect anticipation)
    pub const KEEPER_TRACKING_FACTOR: f32 = 0.7;
    /// Low-pass gain toward the tracking target, per second
    /// (~0.02 per tick at 60 Hz)
    pub const KEEPER_GAIN: f32 = 1.2;
    /// Human reaction time: tracking ignores the ball for this long
    /// after shot release (seconds)
    pub const KEEPER_REACTION_DELAY: f32 = 0.25;
    /// Interception thresholds at the goal-line crossing (m)
    pub const SAVE_REACH_X: f32 = 0.75;
    pub const SAVE_REACH_Y: f32 = 1.4;

    /// Seconds the resolved outcome is held before the next round starts
    pub const ROUND_DWELL_SECS: f32 = 2.0;
}

/// Project a vector onto the pitch plane (drop the vertical component)
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
