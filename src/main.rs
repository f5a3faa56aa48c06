//! Spot Kick entry point
//!
//! Headless demo: plays one scripted shootout at fixed timestep and logs
//! every round outcome. A real frontend would drive the same commands from
//! input events and render each tick's snapshot.

use glam::Vec3;

use spot_kick::consts::SIM_DT;
use spot_kick::sim::{MatchEvent, MatchPhase, MatchState, ShotKind, tick};
use spot_kick::MatchConfig;

/// One scripted attempt: aim, shot kind, charge ticks before release
struct ScriptedShot {
    aim: Vec3,
    kind: ShotKind,
    charge_ticks: u32,
    /// Whether the notional opponent converts their attempt this round
    opponent_scores: bool,
}

fn script() -> Vec<ScriptedShot> {
    vec![
        ScriptedShot {
            aim: Vec3::new(1.0, 0.0, -10.0),
            kind: ShotKind::Push,
            charge_ticks: 90,
            opponent_scores: true,
        },
        ScriptedShot {
            aim: Vec3::new(-0.9, 0.0, -10.0),
            kind: ShotKind::DragFlick,
            charge_ticks: 75,
            opponent_scores: false,
        },
        ScriptedShot {
            aim: Vec3::new(0.0, 0.0, -1.0),
            kind: ShotKind::Push,
            charge_ticks: 60,
            opponent_scores: true,
        },
        ScriptedShot {
            aim: Vec3::new(0.8, 0.0, -12.0),
            kind: ShotKind::Scoop,
            charge_ticks: 40,
            opponent_scores: false,
        },
        ScriptedShot {
            aim: Vec3::new(-1.0, 0.0, -9.0),
            kind: ShotKind::Push,
            charge_ticks: 80,
            opponent_scores: false,
        },
    ]
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    let config = MatchConfig {
        seed,
        keeper_error: 0.15,
        ..Default::default()
    };

    let mut state = match MatchState::new(config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("could not start match: {err}");
            std::process::exit(1);
        }
    };

    let shots = script();
    let mut charging_since: Option<u64> = None;
    // Safety valve so a scripting bug cannot loop forever
    let max_ticks = 60 * 60 * 10;

    for _ in 0..max_ticks {
        if state.phase == MatchPhase::Aiming && state.round.shot.is_none() {
            // Sudden-death rounds reuse the last scripted shot
            let index = (state.round.number as usize - 1).min(shots.len() - 1);
            let shot = &shots[index];
            match charging_since {
                None => {
                    state.begin_charge();
                    charging_since = Some(state.time_ticks);
                }
                Some(start) if state.time_ticks - start >= shot.charge_ticks as u64 => {
                    state.release_shot(shot.aim, shot.kind, None);
                    state.record_opponent_result(shot.opponent_scores);
                    charging_since = None;
                }
                Some(_) => {}
            }
        }

        let snapshot = tick(&mut state, SIM_DT);
        for event in &snapshot.events {
            match event {
                MatchEvent::ShotReleased { round, kind, power } => {
                    log::info!("round {round}: {kind:?} away at power {power:.2}");
                }
                MatchEvent::RoundResolved { round, outcome } => {
                    log::info!("round {round}: {outcome:?}");
                }
                MatchEvent::SuddenDeath => log::info!("sudden death!"),
                MatchEvent::MatchOver { winner } => log::info!("{winner:?} wins"),
            }
        }

        if snapshot.match_over {
            println!(
                "final score {}-{} ({:?} wins{})",
                snapshot.player_score,
                snapshot.opponent_score,
                snapshot.winner.expect("terminal match has a winner"),
                if snapshot.sudden_death {
                    ", after sudden death"
                } else {
                    ""
                }
            );
            return;
        }
    }

    eprintln!("demo script never finished the match");
    std::process::exit(1);
}
