//! Main simulation runner driving `GameEngine` with a scripted player.
//!
//! The bot never answers wrong. Each combat tick it digs the deepest
//! diggable tiles (with dynamite when it has some), spends on the cheapest
//! affordable upgrade and triggers the superpower whenever it is ready.
//! Statistics are collected from the `TickEvent`s the engine emits.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::engine::{AnswerOutcome, DigRequest, GameEngine};
use crate::core::tick::TickEvent;
use crate::equipment::cheapest_affordable;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, rng);
        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                monster = run.final_mob_index,
                deepest_row = run.deepest_row,
                kills = run.kills,
                deaths = run.hero_deaths,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> RunStats {
    let mut engine = GameEngine::with_rng(rng);
    engine.set_testing_mode(config.testing_mode);
    engine.set_math_difficulty(config.math_difficulty);
    engine.set_resource_multiplier(config.resource_multiplier);

    let mut stats = RunStats::default();
    let tick_ms = engine.timings().combat_tick_ms;

    for _ in 0..config.max_ticks_per_run {
        let mut elapsed = 0;

        for _ in 0..config.digs_per_tick {
            let Some((row, col)) = deepest_diggable(&engine) else {
                break;
            };
            match engine.request_dig(row, col) {
                DigRequest::Challenge(problem) => {
                    let use_dynamite = engine.resources().dynamite > 0;
                    let outcome = engine.submit_answer(problem.answer, use_dynamite);
                    debug_assert!(matches!(outcome, AnswerOutcome::DigScheduled { .. }));
                    // Let the dig land before choosing the next tile.
                    let wait = engine.timings().dig_resolve_ms;
                    record_events(&mut stats, engine.advance(wait));
                    elapsed += wait;
                }
                DigRequest::EasterEgg { .. } => {
                    record_events(&mut stats, engine.drain_events());
                }
                DigRequest::NotDiggable | DigRequest::Busy => break,
            }
        }

        if let Some(problem) = engine.request_superpower() {
            if engine.submit_answer(problem.answer, false) == AnswerOutcome::SuperpowerActivated {
                stats.superpowers += 1;
            }
            record_events(&mut stats, engine.drain_events());
        }

        if let Some((slot, _)) = cheapest_affordable(engine.equipment(), engine.resources()) {
            engine.purchase(slot);
            stats.purchases += 1;
        }

        record_events(&mut stats, engine.advance(tick_ms.saturating_sub(elapsed)));
        stats.ticks += 1;
    }

    let state = engine.state();
    stats.final_mob_index = state.current_mob_index;
    stats.deepest_row = state.deepest_row;
    stats.accessible_depth = engine.accessible_depth();
    stats.total_equipment_level = state.equipment.total_level();
    stats.resources = state.resources;
    debug!(ticks = stats.ticks, tiles = stats.tiles_dug, "simulated session");
    stats
}

/// The deepest tile the player could dig right now, leftmost on ties.
fn deepest_diggable(engine: &GameEngine<ChaCha8Rng>) -> Option<(usize, usize)> {
    let grid = &engine.state().grid;
    if grid.rows == 0 {
        return None;
    }
    // Dug tiles all connect to the surface, so nothing diggable lies more
    // than one row below the accessible depth.
    let start = (engine.accessible_depth() + 1).min(grid.rows - 1);
    (0..=start)
        .rev()
        .flat_map(|row| (0..grid.cols).map(move |col| (row, col)))
        .find(|&(row, col)| engine.is_diggable(row, col))
}

fn record_events(stats: &mut RunStats, events: Vec<TickEvent>) {
    for event in events {
        match event {
            TickEvent::MonsterDefeated { .. } => stats.kills += 1,
            TickEvent::HeroDefeated => stats.hero_deaths += 1,
            TickEvent::DigResolved { tiles_dug, area, .. } => {
                stats.tiles_dug += tiles_dug as u64;
                if area {
                    stats.dynamite_used += 1;
                }
            }
            TickEvent::EasterEggFound { .. } => stats.easter_eggs += 1,
            TickEvent::FreeUpgrade { .. } => stats.free_upgrades += 1,
            _ => {}
        }
    }
}
