//! Match state and core simulation types
//!
//! All state that matters for determinism lives here and is serializable.
//! Mutation happens only through the command methods on [`MatchState`] and
//! the per-tick advance in [`super::tick`]; the presentation layer reads
//! the [`Snapshot`] a tick returns and never writes back.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, MatchConfig};
use crate::consts::*;

use super::keeper::Keeper;
use super::shot;

/// Current phase of the match state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPhase {
    /// Pre-match, waiting for a start command
    #[default]
    Idle,
    /// Round timer running, waiting for the shot
    Aiming,
    /// Ball released; physics, keeper, and resolver run each tick
    InFlight,
    /// Outcome decided, held for a dwell window before the next round
    RoundResolved,
    /// Terminal; final score and winner exposed
    MatchOver,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundOutcome {
    #[default]
    Pending,
    Goal,
    Miss,
    Save,
}

/// Shot-type modifier: alters speed ceiling and vertical lift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShotKind {
    /// Flat shot along the turf
    #[default]
    Push,
    /// Higher speed ceiling, small fixed lift
    DragFlick,
    /// Lofted shot; lift grows with power
    Scoop,
}

/// Winner of a decided match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
}

/// The ball - match-scoped, reset to the spot every round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position (m); x lateral, y up, z depth toward the goal (negative)
    pub pos: Vec3,
    /// Velocity (m/s)
    pub vel: Vec3,
    pub radius: f32,
    pub mass: f32,
}

impl Ball {
    pub fn at_spot(config: &MatchConfig) -> Self {
        Self {
            pos: Vec3::new(0.0, config.ball_radius, 0.0),
            vel: Vec3::ZERO,
            radius: config.ball_radius,
            mass: config.ball_mass,
        }
    }
}

/// The scoring aperture. Immutable regulation geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalFrame {
    pub width: f32,
    pub height: f32,
    /// z-coordinate of the goal-line plane
    pub line_z: f32,
}

impl Default for GoalFrame {
    fn default() -> Self {
        Self {
            width: GOAL_WIDTH,
            height: GOAL_HEIGHT,
            line_z: GOAL_LINE_Z,
        }
    }
}

/// The shot as released - kept on the round for inspection/replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotAttempt {
    /// Normalized horizontal aim direction
    pub direction: Vec3,
    /// Charged power, clamped to [0, 1]
    pub power: f32,
    pub kind: ShotKind,
    /// Initial velocity handed to the integrator
    pub velocity: Vec3,
}

/// One shootout round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    /// Countdown (seconds) until the attempt is forfeited
    pub timer: f32,
    pub outcome: RoundOutcome,
    /// Charge accumulator while the charge input is held
    pub charge: Option<f32>,
    /// The released shot, if any; at most one per round
    pub shot: Option<ShotAttempt>,
    /// Whether the host has reported the opponent's attempt this round
    pub opponent_reported: bool,
}

impl Round {
    fn new(number: u32, timeout: f32) -> Self {
        Self {
            number,
            timer: timeout,
            outcome: RoundOutcome::Pending,
            charge: None,
            shot: None,
            opponent_reported: false,
        }
    }
}

/// Events emitted by the sim, drained into each tick's snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    ShotReleased {
        round: u32,
        kind: ShotKind,
        power: f32,
    },
    RoundResolved {
        round: u32,
        outcome: RoundOutcome,
    },
    SuddenDeath,
    MatchOver {
        winner: Winner,
    },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic per-round stream: same (seed, round) always yields the
    /// same draws, independent of how earlier rounds consumed the RNG
    pub fn round_rng(&self, round: u32) -> Pcg32 {
        let round_seed = (round as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        Pcg32::seed_from_u64(round_seed)
    }
}

/// Observable state returned by every tick; all the presentation layer sees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub round: u32,
    /// Aiming countdown remaining (seconds)
    pub timer: f32,
    /// Charge level while the charge input is held
    pub charge: Option<f32>,
    pub ball_pos: Vec3,
    pub ball_vel: Vec3,
    pub keeper_pos: Vec3,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub opponent_score: u32,
    pub sudden_death: bool,
    pub match_over: bool,
    pub winner: Option<Winner>,
    /// Events raised since the previous snapshot
    pub events: Vec<MatchEvent>,
}

/// Complete match state (deterministic, serializable)
///
/// Owns the ball, the keeper, the current round, and the score. Created
/// idle; [`MatchState::start_match`] validates a config and enters Aiming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    pub rng_state: RngState,
    pub phase: MatchPhase,
    pub round: Round,
    /// Completed rounds (the current one excluded)
    pub rounds_played: u32,
    pub player_score: u32,
    pub opponent_score: u32,
    pub sudden_death: bool,
    pub winner: Option<Winner>,
    pub ball: Ball,
    pub keeper: Keeper,
    pub goal: GoalFrame,
    /// Simulated seconds left in the RoundResolved dwell window
    pub dwell_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Queued events, drained by the next tick's snapshot
    pub(super) events: Vec<MatchEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::idle()
    }
}

impl MatchState {
    /// Pre-match state; nothing moves until [`Self::start_match`]
    pub fn idle() -> Self {
        let config = MatchConfig::default();
        Self {
            config,
            rng_state: RngState::new(config.seed),
            phase: MatchPhase::Idle,
            round: Round::new(0, config.shot_timeout_secs),
            rounds_played: 0,
            player_score: 0,
            opponent_score: 0,
            sudden_death: false,
            winner: None,
            ball: Ball::at_spot(&config),
            keeper: Keeper::at_center(),
            goal: GoalFrame::default(),
            dwell_remaining: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Validate the config and start a fresh match in Aiming.
    /// On a config error the current state is left untouched.
    pub fn start_match(&mut self, config: MatchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self = Self::idle();
        self.config = config;
        self.rng_state = RngState::new(config.seed);
        self.begin_round(1);
        log::info!(
            "match started: {} rounds, seed {}",
            config.rounds,
            config.seed
        );
        Ok(())
    }

    /// Convenience constructor: validated config straight into Aiming
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let mut state = Self::idle();
        state.start_match(config)?;
        Ok(state)
    }

    /// Abort whatever is happening and return to Idle. Always safe; any
    /// pending dwell transition is discarded.
    pub fn reset(&mut self) {
        log::info!("match reset");
        *self = Self::idle();
    }

    /// Start holding the charge input. No-op outside Aiming or once the
    /// round's shot has been taken.
    pub fn begin_charge(&mut self) {
        if self.phase != MatchPhase::Aiming || self.round.shot.is_some() {
            log::debug!("begin_charge ignored in {:?}", self.phase);
            return;
        }
        if self.round.charge.is_none() {
            self.round.charge = Some(0.0);
        }
    }

    /// Release the shot. Power comes from the explicit override, else the
    /// accumulated charge, else the untimed default. No-op outside Aiming
    /// or if this round's shot is already gone.
    pub fn release_shot(&mut self, aim: Vec3, kind: ShotKind, power: Option<f32>) {
        if self.phase != MatchPhase::Aiming || self.round.shot.is_some() {
            log::debug!("release_shot ignored in {:?}", self.phase);
            return;
        }

        let power = power
            .or(self.round.charge)
            .unwrap_or(DEFAULT_POWER)
            .clamp(0.0, 1.0);
        let direction = shot::aim_direction(aim);
        let velocity = shot::initial_velocity(aim, power, kind, self.config.max_shot_speed);

        self.ball.vel = velocity;
        self.round.charge = None;
        self.round.shot = Some(ShotAttempt {
            direction,
            power,
            kind,
            velocity,
        });
        self.keeper.on_shot_released();
        self.phase = MatchPhase::InFlight;
        self.events.push(MatchEvent::ShotReleased {
            round: self.round.number,
            kind,
            power,
        });
        log::debug!(
            "round {}: {:?} released at power {:.2}",
            self.round.number,
            kind,
            power
        );
    }

    /// Host report of the opponent's notional attempt for this round.
    /// Accepted once per round, from shot release (or forfeit) through the
    /// dwell window; no-op otherwise.
    pub fn record_opponent_result(&mut self, scored: bool) {
        let accepting = matches!(
            self.phase,
            MatchPhase::InFlight | MatchPhase::RoundResolved
        );
        if !accepting || self.round.opponent_reported {
            log::debug!("record_opponent_result ignored in {:?}", self.phase);
            return;
        }
        self.round.opponent_reported = true;
        if scored {
            self.opponent_score += 1;
        }
    }

    /// Seal the current round with a terminal outcome and enter the dwell
    pub(super) fn resolve_round(&mut self, outcome: RoundOutcome) {
        debug_assert_ne!(outcome, RoundOutcome::Pending);
        self.round.outcome = outcome;
        if outcome == RoundOutcome::Goal {
            self.player_score += 1;
        }
        self.phase = MatchPhase::RoundResolved;
        self.dwell_remaining = ROUND_DWELL_SECS;
        self.events.push(MatchEvent::RoundResolved {
            round: self.round.number,
            outcome,
        });
        log::info!(
            "round {} resolved: {:?} ({}-{})",
            self.round.number,
            outcome,
            self.player_score,
            self.opponent_score
        );
    }

    /// Dwell expired: advance to the next round or terminate the match
    pub(super) fn advance_round(&mut self) {
        self.rounds_played += 1;

        let regulation_done = self.rounds_played >= self.config.rounds;
        if regulation_done && self.player_score != self.opponent_score {
            let winner = if self.player_score > self.opponent_score {
                Winner::Player
            } else {
                Winner::Opponent
            };
            self.winner = Some(winner);
            self.phase = MatchPhase::MatchOver;
            self.events.push(MatchEvent::MatchOver { winner });
            log::info!(
                "match over: {:?} wins {}-{}",
                winner,
                self.player_score,
                self.opponent_score
            );
            return;
        }

        if regulation_done && !self.sudden_death {
            self.sudden_death = true;
            self.events.push(MatchEvent::SuddenDeath);
            log::info!(
                "level at {}-{} after regulation: sudden death",
                self.player_score,
                self.opponent_score
            );
        }

        self.begin_round(self.round.number + 1);
    }

    /// Reset ball, keeper, and timer for a round and enter Aiming
    fn begin_round(&mut self, number: u32) {
        self.round = Round::new(number, self.config.shot_timeout_secs);
        self.ball = Ball::at_spot(&self.config);

        // Per-round anticipation error; 0.0 config keeps this at zero
        let error = if self.config.keeper_error > 0.0 {
            let mut rng = self.rng_state.round_rng(number);
            rng.random_range(-self.config.keeper_error..=self.config.keeper_error)
        } else {
            0.0
        };
        self.keeper = Keeper::at_center();
        self.keeper.anticipation_error = error;

        self.phase = MatchPhase::Aiming;
    }

    /// Assemble the observable snapshot, draining queued events
    pub(super) fn snapshot(&mut self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            round: self.round.number,
            timer: self.round.timer,
            charge: self.round.charge,
            ball_pos: self.ball.pos,
            ball_vel: self.ball.vel,
            keeper_pos: self.keeper.pos,
            outcome: self.round.outcome,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            sudden_death: self.sudden_death,
            match_over: self.phase == MatchPhase::MatchOver,
            winner: self.winner,
            events: std::mem::take(&mut self.events),
        }
    }
}
