//! Goalkeeper controller
//!
//! Reactive lateral tracking with a human-like feel: the keeper aims for a
//! fraction of the ball's x (imperfect anticipation), moves there through a
//! low-pass filter instead of snapping, ignores the ball for a reaction
//! window after release, and never leaves the goal mouth.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::Ball;

/// The goalkeeper - match-scoped, re-centered every round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keeper {
    /// Position; x is the tracked coordinate, z sits on the goal line
    pub pos: Vec3,
    pub half_width: f32,
    /// Seconds since the shot was released, `None` while no shot is live
    pub since_shot: Option<f32>,
    /// Per-round lateral anticipation error (m), drawn from the seeded RNG
    /// when `keeper_error` is configured; 0.0 otherwise
    pub anticipation_error: f32,
}

impl Keeper {
    pub fn at_center() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, GOAL_LINE_Z),
            half_width: KEEPER_HALF_WIDTH,
            since_shot: None,
            anticipation_error: 0.0,
        }
    }

    /// Arm the reaction-delay counter
    pub fn on_shot_released(&mut self) {
        self.since_shot = Some(0.0);
    }

    /// Recompute the keeper's x for this tick
    pub fn update(&mut self, ball: &Ball, dt: f32) {
        let tracking = match self.since_shot.as_mut() {
            Some(elapsed) => {
                *elapsed += dt;
                // Reaction window: hold position, the shot hasn't registered yet
                *elapsed >= KEEPER_REACTION_DELAY
            }
            // No live shot: drift back toward the ball on the spot (center)
            None => true,
        };

        if tracking {
            let target =
                (ball.pos.x * KEEPER_TRACKING_FACTOR + self.anticipation_error).clamp(
                    -KEEPER_TRAVEL,
                    KEEPER_TRAVEL,
                );
            let gain = (KEEPER_GAIN * dt).min(1.0);
            self.pos.x += (target - self.pos.x) * gain;
        }

        self.pos.x = self.pos.x.clamp(-KEEPER_TRAVEL, KEEPER_TRAVEL);
    }

    /// Whether a goal-line crossing at (x, y) is within save reach
    pub fn within_save_reach(&self, cross_x: f32, cross_y: f32) -> bool {
        (cross_x - self.pos.x).abs() <= SAVE_REACH_X && cross_y <= SAVE_REACH_Y
    }
}
