//! Outcome resolver
//!
//! Inspects the ball after each in-flight integration step and decides
//! whether the round is over. Checked in priority order:
//! 1. goal-line crossing (GOAL / SAVE / MISS by aperture and keeper reach)
//! 2. ball stopped short of the line (MISS)
//!
//! The third terminal condition - the Aiming timer running out before a
//! shot - never coexists with a ball in flight and is handled by the
//! state machine in [`super::tick`].

use glam::Vec3;

use super::keeper::Keeper;
use super::physics;
use super::state::{Ball, GoalFrame, RoundOutcome};

/// Resolve the tick's outcome. `prev_pos` is the ball position before this
/// tick's integration step, used to catch the goal-line crossing exactly.
pub fn resolve(prev_pos: Vec3, ball: &Ball, keeper: &Keeper, goal: &GoalFrame) -> RoundOutcome {
    if prev_pos.z > goal.line_z && ball.pos.z <= goal.line_z {
        // Interpolate where the ball pierced the goal-line plane
        let t = (goal.line_z - prev_pos.z) / (ball.pos.z - prev_pos.z);
        let cross = prev_pos.lerp(ball.pos, t);

        let inside_aperture = cross.x.abs() <= goal.width / 2.0 && cross.y <= goal.height;
        if !inside_aperture {
            return RoundOutcome::Miss; // wide, or over the crossbar
        }
        return if keeper.within_save_reach(cross.x, cross.y) {
            RoundOutcome::Save
        } else {
            RoundOutcome::Goal
        };
    }

    if physics::is_stopped(ball) {
        return RoundOutcome::Miss;
    }

    RoundOutcome::Pending
}
