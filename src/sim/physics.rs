//! Ball kinematics
//!
//! One integration step per tick: turf drag, gravity while airborne, ground
//! clamp with restitution bounce, then position advance. The integrator is a
//! pure function of (state, dt, constants) - identical inputs reproduce
//! identical trajectories, which is what the round tests lean on.
//!
//! Goalposts and crossbar are not rigid bodies here; goal interaction is the
//! purely geometric plane test in [`super::outcome`]. Modeling post rebounds
//! would be an optional extension, not a correctness requirement.

use crate::consts::STOP_SPEED;
use crate::config::MatchConfig;

use super::state::Ball;

/// World constants consumed by the integrator
#[derive(Debug, Clone, Copy)]
pub struct PhysicsParams {
    /// Gravity (m/s²)
    pub gravity: f32,
    /// Linear damping coefficient for turf drag
    pub friction: f32,
    /// Bounce energy retention on ground contact
    pub restitution: f32,
}

impl PhysicsParams {
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            gravity: crate::consts::GRAVITY,
            friction: config.turf_friction,
            restitution: config.restitution,
        }
    }
}

/// Advance the ball by one timestep
pub fn integrate(ball: &mut Ball, dt: f32, params: &PhysicsParams) {
    // Turf drag as linear damping
    ball.vel *= 1.0 - params.friction * dt;

    if ball.pos.y > ball.radius {
        // Airborne: free fall
        ball.vel.y -= params.gravity * dt;
    } else {
        // Ground contact: never penetrate the turf plane
        ball.pos.y = ball.radius;
        if ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y * params.restitution;
        }
        // Upward or zero vertical velocity is resting/leaving contact
    }

    ball.pos += ball.vel * dt;

    // The turf invariant holds between ticks, not just at contact handling;
    // the bounce response for the landing is applied on the next step
    if ball.pos.y < ball.radius {
        ball.pos.y = ball.radius;
    }
}

/// A grounded ball moving slower than the stop threshold is done for the
/// round; the resolver turns this into a MISS if the line was never crossed
pub fn is_stopped(ball: &Ball) -> bool {
    ball.pos.y <= ball.radius + 1e-4 && ball.vel.length() < STOP_SPEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn params() -> PhysicsParams {
        PhysicsParams::from_config(&MatchConfig::default())
    }

    fn resting_ball() -> Ball {
        let radius = MatchConfig::default().ball_radius;
        Ball {
            pos: Vec3::new(0.0, radius, 0.0),
            vel: Vec3::ZERO,
            radius,
            mass: MatchConfig::default().ball_mass,
        }
    }

    #[test]
    fn test_resting_ball_is_fixed_point() {
        let mut ball = resting_ball();
        let before = ball;
        for _ in 0..1000 {
            integrate(&mut ball, crate::consts::SIM_DT, &params());
        }
        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
    }

    #[test]
    fn test_airborne_ball_falls() {
        let mut ball = resting_ball();
        ball.pos.y = 1.0;
        integrate(&mut ball, crate::consts::SIM_DT, &params());
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_downward_contact_bounces_with_restitution() {
        let mut ball = resting_ball();
        ball.vel.y = -2.0;
        let p = params();
        integrate(&mut ball, crate::consts::SIM_DT, &p);
        // Clamped out of the turf, vertical velocity reversed and damped
        assert!(ball.vel.y > 0.0);
        let drag = 1.0 - p.friction * crate::consts::SIM_DT;
        assert!((ball.vel.y - 2.0 * drag * p.restitution).abs() < 1e-5);
    }

    #[test]
    fn test_friction_slows_rolling_ball() {
        let mut ball = resting_ball();
        ball.vel = Vec3::new(0.0, 0.0, -10.0);
        let start_speed = ball.vel.length();
        for _ in 0..60 {
            integrate(&mut ball, crate::consts::SIM_DT, &params());
        }
        assert!(ball.vel.length() < start_speed);
        assert!(ball.vel.length() > 0.0);
    }

    #[test]
    fn test_is_stopped_threshold() {
        let mut ball = resting_ball();
        assert!(is_stopped(&ball));
        ball.vel.z = -0.1;
        assert!(is_stopped(&ball));
        ball.vel.z = -1.0;
        assert!(!is_stopped(&ball));
        // Airborne is never "stopped" even when slow
        ball.vel = Vec3::ZERO;
        ball.pos.y = 1.0;
        assert!(!is_stopped(&ball));
    }

    proptest! {
        /// Idempotence at rest for any positive dt and friction
        #[test]
        fn prop_rest_is_fixed_point(dt in 1e-4f32..0.05, friction in 0.0f32..1.0) {
            let mut ball = resting_ball();
            let p = PhysicsParams { friction, ..params() };
            for _ in 0..100 {
                integrate(&mut ball, dt, &p);
            }
            prop_assert_eq!(ball.pos, resting_ball().pos);
            prop_assert_eq!(ball.vel, Vec3::ZERO);
        }

        /// The ball never penetrates the turf plane, whatever the launch
        #[test]
        fn prop_ball_never_below_turf(
            vx in -31.0f32..31.0,
            vy in -10.0f32..15.0,
            vz in -31.0f32..0.0,
            y0 in 0.037f32..3.0,
        ) {
            let mut ball = resting_ball();
            ball.pos.y = y0;
            ball.vel = Vec3::new(vx, vy, vz);
            for _ in 0..600 {
                integrate(&mut ball, crate::consts::SIM_DT, &params());
                prop_assert!(ball.pos.y >= ball.radius);
            }
        }
    }
}
