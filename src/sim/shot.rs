//! Shot model
//!
//! Turns the shooter's input gesture into the ball's initial velocity.
//! Horizontal speed is power × the kind's ceiling; vertical lift comes
//! only from the shot kind. The depth component is always forced toward
//! the goal - a shot can never be aimed backward.

use glam::Vec3;

use crate::consts::*;
use crate::horizontal;

use super::state::ShotKind;

/// Normalized horizontal aim direction for a raw drag/aim vector.
/// Degenerate input falls back to straight at the goal center.
pub fn aim_direction(aim: Vec3) -> Vec3 {
    let mut dir = horizontal(aim);
    // Toward the goal plane, never backward
    dir.z = -dir.z.abs();
    match dir.try_normalize() {
        Some(unit) => unit,
        None => Vec3::NEG_Z,
    }
}

/// Speed ceiling for a shot kind (m/s)
fn speed_ceiling(kind: ShotKind, max_shot_speed: f32) -> f32 {
    match kind {
        ShotKind::Push | ShotKind::Scoop => max_shot_speed,
        ShotKind::DragFlick => max_shot_speed * DRAG_FLICK_SPEED_FACTOR,
    }
}

/// Vertical lift for a shot kind at a given power (m/s)
fn lift(kind: ShotKind, power: f32) -> f32 {
    match kind {
        ShotKind::Push => 0.0,
        ShotKind::DragFlick => DRAG_FLICK_LIFT,
        ShotKind::Scoop => power * SCOOP_LIFT_FACTOR,
    }
}

/// Compute the ball's initial velocity at shot release
pub fn initial_velocity(aim: Vec3, power: f32, kind: ShotKind, max_shot_speed: f32) -> Vec3 {
    let power = power.clamp(0.0, 1.0);
    if power <= 0.0 {
        // A powerless shot goes nowhere (and resolves via the stop path)
        return Vec3::ZERO;
    }

    let mut velocity = aim_direction(aim) * (power * speed_ceiling(kind, max_shot_speed));
    velocity.y = lift(kind, power);
    velocity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_power_push_hits_speed_ceiling() {
        let v = initial_velocity(Vec3::NEG_Z, 1.0, ShotKind::Push, MAX_SHOT_SPEED);
        assert!((v.length() - MAX_SHOT_SPEED).abs() < 1e-4);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_zero_power_shot_is_stationary() {
        for kind in [ShotKind::Push, ShotKind::DragFlick, ShotKind::Scoop] {
            let v = initial_velocity(Vec3::NEG_Z, 0.0, kind, MAX_SHOT_SPEED);
            assert_eq!(v, Vec3::ZERO);
        }
    }

    #[test]
    fn test_power_is_clamped() {
        let v = initial_velocity(Vec3::NEG_Z, 7.3, ShotKind::Push, MAX_SHOT_SPEED);
        assert!((v.length() - MAX_SHOT_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_backward_aim_is_forced_toward_goal() {
        let v = initial_velocity(Vec3::new(0.2, 0.0, 1.0), 1.0, ShotKind::Push, MAX_SHOT_SPEED);
        assert!(v.z < 0.0);
    }

    #[test]
    fn test_degenerate_aim_falls_back_to_center() {
        assert_eq!(aim_direction(Vec3::ZERO), Vec3::NEG_Z);
        // Vertical-only input is degenerate too (lift is not aimable)
        assert_eq!(aim_direction(Vec3::new(0.0, 3.0, 0.0)), Vec3::NEG_Z);
    }

    #[test]
    fn test_scoop_lift_scales_with_power() {
        let half = initial_velocity(Vec3::NEG_Z, 0.5, ShotKind::Scoop, MAX_SHOT_SPEED);
        let full = initial_velocity(Vec3::NEG_Z, 1.0, ShotKind::Scoop, MAX_SHOT_SPEED);
        assert!((half.y - 0.5 * SCOOP_LIFT_FACTOR).abs() < 1e-5);
        assert!((full.y - SCOOP_LIFT_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn test_drag_flick_has_higher_ceiling_and_fixed_lift() {
        let flick = initial_velocity(Vec3::NEG_Z, 1.0, ShotKind::DragFlick, MAX_SHOT_SPEED);
        let across_pitch = horizontal(flick).length();
        assert!((across_pitch - MAX_SHOT_SPEED * DRAG_FLICK_SPEED_FACTOR).abs() < 1e-3);
        assert_eq!(flick.y, DRAG_FLICK_LIFT);
    }

    #[test]
    fn test_aim_direction_preserves_lateral_ratio() {
        let dir = aim_direction(Vec3::new(1.0, 0.0, -1.0));
        assert!((dir.x - dir.z.abs()).abs() < 1e-6);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }
}
