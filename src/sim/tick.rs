//! Fixed timestep simulation tick
//!
//! Advances the match deterministically. In-tick ordering is strict:
//! integrate the ball, then track the keeper, then resolve the outcome.
//! All timers (shot countdown, dwell) run on simulated time, never on the
//! wall clock, so tests fast-forward by ticking.

use crate::consts::{CHARGE_RATE, MAX_TICK_DT};

use super::outcome;
use super::physics::{self, PhysicsParams};
use super::state::{MatchPhase, MatchState, RoundOutcome, Snapshot};

/// Advance the match by one timestep and return the observable snapshot.
/// dt larger than [`MAX_TICK_DT`] is clamped so a frame hitch cannot blow
/// up the integration.
pub fn tick(state: &mut MatchState, dt: f32) -> Snapshot {
    let dt = dt.clamp(0.0, MAX_TICK_DT);

    match state.phase {
        // Nothing moves before the start command or after the final whistle
        MatchPhase::Idle | MatchPhase::MatchOver => return state.snapshot(),
        _ => {}
    }

    state.time_ticks += 1;

    match state.phase {
        MatchPhase::Aiming => {
            if let Some(charge) = state.round.charge.as_mut() {
                *charge = (*charge + CHARGE_RATE * dt).min(1.0);
            }
            // Keeper drifts back to center while the ball sits on the spot
            state.keeper.update(&state.ball, dt);

            state.round.timer -= dt;
            if state.round.timer <= 0.0 {
                state.round.timer = 0.0;
                // Forfeited attempt
                state.resolve_round(RoundOutcome::Miss);
            }
        }

        MatchPhase::InFlight => {
            let prev_pos = state.ball.pos;
            let params = PhysicsParams::from_config(&state.config);
            physics::integrate(&mut state.ball, dt, &params);
            state.keeper.update(&state.ball, dt);

            let outcome = outcome::resolve(prev_pos, &state.ball, &state.keeper, &state.goal);
            if outcome != RoundOutcome::Pending {
                state.resolve_round(outcome);
            }
        }

        MatchPhase::RoundResolved => {
            // The keeper repositions every tick, shot in flight or not
            state.keeper.update(&state.ball, dt);

            state.dwell_remaining -= dt;
            if state.dwell_remaining <= 0.0 {
                state.dwell_remaining = 0.0;
                state.advance_round();
            }
        }

        MatchPhase::Idle | MatchPhase::MatchOver => unreachable!(),
    }

    state.snapshot()
}
