//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed (or clamped) timestep only
//! - Seeded RNG only, and only behind the explicit `keeper_error` knob
//! - Strict in-tick order: integrate ball, track keeper, resolve outcome
//! - No rendering or platform dependencies
//!
//! The presentation layer drives the sim through commands on [`MatchState`]
//! plus [`tick`], and reads back the [`Snapshot`] each tick returns.

pub mod keeper;
pub mod outcome;
pub mod physics;
pub mod shot;
pub mod state;
pub mod tick;

pub use keeper::Keeper;
pub use outcome::resolve;
pub use physics::{PhysicsParams, integrate, is_stopped};
pub use shot::initial_velocity;
pub use state::{
    Ball, GoalFrame, MatchEvent, MatchPhase, MatchState, RngState, Round, RoundOutcome, ShotAttempt,
    ShotKind, Snapshot, Winner,
};
pub use tick::tick;
