//! The session coordinator.
//!
//! `GameEngine` owns the persisted `GameState` plus everything transient
//! (combat, the monster roster, the open challenge, the action queue) and is
//! the only place state transitions happen. Time only moves through
//! [`GameEngine::advance`], so a session can be driven by a real timer, a
//! test, or the simulator with identical results for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::game_state::GameState;
use super::progression::{record_digs, FreeUpgrade};
use super::scheduler::{Action, Scheduler, Timings};
use super::tick::TickEvent;
use crate::character::compute_hero_stats;
use crate::combat::{apply_attack, begin_turn, detect_defeat, CombatState, Side};
use crate::equipment::{purchase, EquipmentLevels, EquipmentSlot, PurchaseOutcome};
use crate::loot::{easter_egg_reward, kill_loot};
use crate::mine::{self, accessible_depth, generate_mine, DigResult, TileType};
use crate::monsters::MonsterRoster;
use crate::problems::{generate_problem, Problem};
use crate::resources::{ResourceKind, Resources};

/// An open arithmetic challenge waiting for the player's answer.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChallenge {
    Dig { row: usize, col: usize, problem: Problem },
    Superpower { problem: Problem },
}

impl PendingChallenge {
    pub fn problem(&self) -> &Problem {
        match self {
            PendingChallenge::Dig { problem, .. } => problem,
            PendingChallenge::Superpower { problem } => problem,
        }
    }
}

/// Response to a dig request.
#[derive(Debug, Clone, PartialEq)]
pub enum DigRequest {
    /// A problem must be solved first.
    Challenge(Problem),
    /// An easter egg was claimed on the spot.
    EasterEgg { kind: ResourceKind, amount: u64 },
    NotDiggable,
    /// Another challenge is already open.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    NoChallenge,
    /// Wrong dig answer. Nothing changed besides closing the challenge.
    Wrong,
    DigScheduled {
        row: usize,
        col: usize,
        use_dynamite: bool,
    },
    SuperpowerActivated,
    SuperpowerFailed,
}

/// A resolved dig as credited to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigReport {
    /// Tiles dug and loot, loot already scaled by the resource multiplier.
    pub result: DigResult,
    pub area: bool,
    pub free_upgrade: Option<FreeUpgrade>,
}

pub struct GameEngine<R: Rng = StdRng> {
    state: GameState,
    combat: CombatState,
    roster: MonsterRoster,
    scheduler: Scheduler,
    timings: Timings,
    pending: Option<PendingChallenge>,
    accessible_depth: usize,
    events: Vec<TickEvent>,
    rng: R,
}

impl GameEngine<StdRng> {
    /// A fresh session seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A fresh, reproducible session.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// A fresh session drawing all randomness from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let state = GameState::new(&mut rng);
        Self::from_state(state, rng)
    }

    /// Rebuilds a session around loaded state.
    ///
    /// Combat starts fresh: the hero from equipment and buff state, the
    /// monster at `current_mob_index`, both at full HP.
    pub fn from_state(mut state: GameState, mut rng: R) -> Self {
        state.settings = state.settings.sanitized();
        let mut roster = MonsterRoster::new(&mut rng);
        let hero = compute_hero_stats(&state.equipment, &state.superpower);
        let monster = roster
            .template(state.current_mob_index as usize, &mut rng)
            .to_stats();
        let accessible = accessible_depth(&state.grid);
        let timings = Timings::default();

        let mut scheduler = Scheduler::new();
        scheduler.schedule(timings.combat_tick_ms, Action::CombatTick);

        Self {
            state,
            combat: CombatState::new(hero, monster),
            roster,
            scheduler,
            timings,
            pending: None,
            accessible_depth: accessible,
            events: Vec::new(),
            rng,
        }
    }

    /// Replaces the beat durations. The already-queued combat tick keeps its
    /// original due time.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tools and tests that set up scenarios directly.
    /// Call [`GameEngine::refresh`] afterwards if grid or equipment changed.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    pub fn resources(&self) -> &Resources {
        &self.state.resources
    }

    pub fn equipment(&self) -> &EquipmentLevels {
        &self.state.equipment
    }

    pub fn pending_challenge(&self) -> Option<&PendingChallenge> {
        self.pending.as_ref()
    }

    pub fn roster(&self) -> &MonsterRoster {
        &self.roster
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn is_diggable(&self, row: usize, col: usize) -> bool {
        mine::is_diggable(&self.state.grid, row, col)
    }

    /// Deepest row connected to the surface, cached since the last grid change.
    pub fn accessible_depth(&self) -> usize {
        self.accessible_depth
    }

    /// Whether a dig resolution is still queued.
    pub fn has_pending_dig(&self) -> bool {
        self.scheduler
            .contains(|a| matches!(a, Action::ResolveDig { .. }))
    }

    /// Recomputes every cache derived from state after an external edit.
    pub fn refresh(&mut self) {
        self.accessible_depth = accessible_depth(&self.state.grid);
        self.refresh_hero_stats();
    }

    // ── Time ────────────────────────────────────────────────────

    /// Runs every action due within the next `elapsed_ms` and returns the
    /// events produced, in order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TickEvent> {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some(action) = self.scheduler.pop_due(until) {
            self.dispatch(action);
        }
        self.scheduler.advance_clock(until);
        self.drain_events()
    }

    /// Events produced by direct transition calls since the last drain.
    pub fn drain_events(&mut self) -> Vec<TickEvent> {
        std::mem::take(&mut self.events)
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::CombatTick => {
                self.on_combat_tick();
                self.scheduler
                    .schedule(self.timings.combat_tick_ms, Action::CombatTick);
            }
            Action::ResolveAttack(side) => self.resolve_attack(side),
            Action::SettleAttack(side) => {
                self.events.push(TickEvent::AttackSettled { attacker: side });
            }
            Action::ProcessDefeat(Side::Monster) => {
                self.on_monster_defeated();
            }
            Action::ProcessDefeat(Side::Hero) => self.on_hero_defeated(),
            Action::ResolveDig {
                row,
                col,
                use_dynamite,
            } => {
                let area = use_dynamite
                    && self
                        .state
                        .resources
                        .try_spend(&Resources::new().with(ResourceKind::Dynamite, 1));
                self.on_dig(row, col, area);
            }
        }
    }

    // ── Combat ──────────────────────────────────────────────────

    /// One combat beat: the turn owner declares an attack that resolves after
    /// the wind-up. Ignored while combat is not idle.
    ///
    /// Superpower counters tick at the start of every hero turn.
    pub fn on_combat_tick(&mut self) -> Option<Side> {
        let attacker = begin_turn(&mut self.combat)?;
        if attacker == Side::Hero && self.state.superpower.tick_turn() {
            self.refresh_hero_stats();
            self.events.push(TickEvent::SuperpowerChanged {
                active: self.state.superpower.is_active(),
            });
        }
        self.events.push(TickEvent::AttackStarted { attacker });
        self.scheduler
            .schedule(self.timings.attack_windup_ms, Action::ResolveAttack(attacker));
        Some(attacker)
    }

    fn resolve_attack(&mut self, attacker: Side) {
        let Some(outcome) = apply_attack(&mut self.combat, attacker, &mut self.rng) else {
            return;
        };
        let defender_hp = self.combat.combatant(attacker.opponent()).hp;
        debug!(?attacker, ?outcome, defender_hp, "attack resolved");
        self.events.push(TickEvent::AttackResolved {
            attacker,
            outcome,
            defender_hp,
        });
        self.scheduler
            .schedule(self.timings.attack_recovery_ms, Action::SettleAttack(attacker));

        if let Some(defeated) = detect_defeat(&mut self.combat) {
            self.scheduler
                .schedule(self.timings.defeat_delay_ms, Action::ProcessDefeat(defeated));
        }
    }

    /// Credits kill loot plus one dynamite, advances the monster index and
    /// spawns the next monster at full HP. Returns the credited loot.
    pub fn on_monster_defeated(&mut self) -> Resources {
        let index = self.state.current_mob_index;
        let mut loot = kill_loot(index, self.state.settings.resource_multiplier, &mut self.rng);
        loot.add(ResourceKind::Dynamite, 1);
        self.state.resources.merge(&loot);

        let name = self.combat.monster.name.clone();
        info!(index, name = %name, "monster defeated");
        self.events.push(TickEvent::MonsterDefeated { index, name, loot });

        self.state.current_mob_index = index.saturating_add(1);
        self.spawn_current_monster();
        self.combat.turn = Side::Hero;
        self.combat.pending_defeat = None;
        self.combat.attack_in_flight = None;
        loot
    }

    /// Heals both sides to full and hands the turn back to the hero.
    pub fn on_hero_defeated(&mut self) {
        info!(monster = %self.combat.monster.name, "hero defeated");
        self.combat.hero.heal_full();
        self.combat.monster.heal_full();
        self.combat.turn = Side::Hero;
        self.combat.pending_defeat = None;
        self.combat.attack_in_flight = None;
        self.events.push(TickEvent::HeroDefeated);
    }

    fn spawn_current_monster(&mut self) {
        let index = self.state.current_mob_index;
        let monster = self.roster.template(index as usize, &mut self.rng).to_stats();
        self.events.push(TickEvent::MonsterSpawned {
            index,
            name: monster.name.clone(),
            max_hp: monster.max_hp,
        });
        self.combat.set_monster(monster);
    }

    fn refresh_hero_stats(&mut self) {
        let stats = compute_hero_stats(&self.state.equipment, &self.state.superpower);
        self.combat.update_hero_stats(stats);
    }

    // ── Mining ──────────────────────────────────────────────────

    /// Asks to dig a tile. Easter eggs are claimed immediately; anything else
    /// opens a dig challenge for that tile's row.
    pub fn request_dig(&mut self, row: usize, col: usize) -> DigRequest {
        if !self.is_diggable(row, col) {
            return DigRequest::NotDiggable;
        }
        if self.pending.is_some() {
            return DigRequest::Busy;
        }

        if self.state.grid.tile_type(row, col) == Some(TileType::EasterEgg) {
            let (kind, amount) =
                easter_egg_reward(self.state.settings.resource_multiplier, &mut self.rng);
            self.state.grid.set_tile_type(row, col, TileType::Empty);
            self.state.deepest_row = self.state.deepest_row.max(row);
            self.state.resources.add(kind, amount);
            self.accessible_depth = accessible_depth(&self.state.grid);
            info!(row, col, ?kind, amount, "easter egg found");
            self.events.push(TickEvent::EasterEggFound {
                row,
                col,
                kind,
                amount,
            });
            return DigRequest::EasterEgg { kind, amount };
        }

        let problem = generate_problem(row, self.state.settings.math_difficulty, &mut self.rng);
        self.pending = Some(PendingChallenge::Dig {
            row,
            col,
            problem: problem.clone(),
        });
        DigRequest::Challenge(problem)
    }

    /// Resolves a dig immediately: mutates the grid, credits scaled loot,
    /// raises the deepest row and runs the free-upgrade check.
    ///
    /// Dynamite is not touched here; the queued dig path debits it.
    pub fn on_dig(&mut self, row: usize, col: usize, area: bool) -> DigReport {
        let mut result = mine::dig(&mut self.state.grid, row, col, area, &mut self.rng);
        result.loot = result.loot.scaled(self.state.settings.resource_multiplier);
        self.state.resources.merge(&result.loot);

        if let Some(deepest) = result.deepest_dug_row {
            self.state.deepest_row = self.state.deepest_row.max(deepest);
        }
        if !result.is_empty() {
            self.accessible_depth = accessible_depth(&self.state.grid);
        }
        debug!(row, col, area, tiles = result.tiles_dug, "dig resolved");
        self.events.push(TickEvent::DigResolved {
            row,
            col,
            area,
            tiles_dug: result.tiles_dug,
            loot: result.loot,
        });

        let free_upgrade = record_digs(&mut self.state, result.tiles_dug, &mut self.rng);
        if let Some(upgrade) = free_upgrade {
            self.refresh_hero_stats();
            self.events.push(TickEvent::FreeUpgrade {
                slot: upgrade.slot,
                level: upgrade.level,
            });
        }

        DigReport {
            result,
            area,
            free_upgrade,
        }
    }

    // ── Challenges ──────────────────────────────────────────────

    /// Opens a superpower challenge if the cooldown has run out.
    pub fn request_superpower(&mut self) -> Option<Problem> {
        if self.pending.is_some() || !self.state.superpower.is_ready() {
            return None;
        }
        let problem = generate_problem(
            self.state.deepest_row,
            self.state.settings.math_difficulty,
            &mut self.rng,
        );
        self.pending = Some(PendingChallenge::Superpower {
            problem: problem.clone(),
        });
        Some(problem)
    }

    /// Answers the open challenge and closes it.
    ///
    /// A correct dig answer queues the dig; it becomes an area dig if
    /// `use_dynamite` is set and dynamite is still held when it resolves.
    pub fn submit_answer(&mut self, answer: i64, use_dynamite: bool) -> AnswerOutcome {
        let Some(challenge) = self.pending.take() else {
            return AnswerOutcome::NoChallenge;
        };
        let correct = challenge.problem().is_correct(answer);

        match challenge {
            PendingChallenge::Dig { row, col, .. } => {
                if !correct {
                    return AnswerOutcome::Wrong;
                }
                self.scheduler.schedule(
                    self.timings.dig_resolve_ms,
                    Action::ResolveDig {
                        row,
                        col,
                        use_dynamite,
                    },
                );
                AnswerOutcome::DigScheduled {
                    row,
                    col,
                    use_dynamite,
                }
            }
            PendingChallenge::Superpower { .. } => {
                let was_active = self.state.superpower.is_active();
                self.state.superpower.resolve(correct);
                self.refresh_hero_stats();
                if was_active != self.state.superpower.is_active() {
                    self.events.push(TickEvent::SuperpowerChanged {
                        active: self.state.superpower.is_active(),
                    });
                }
                if correct {
                    info!("superpower activated");
                    AnswerOutcome::SuperpowerActivated
                } else {
                    AnswerOutcome::SuperpowerFailed
                }
            }
        }
    }

    /// Closes the open challenge without any other effect.
    pub fn cancel_challenge(&mut self) {
        self.pending = None;
    }

    // ── Economy ─────────────────────────────────────────────────

    /// Buys the next level of `slot`. Free in testing mode.
    pub fn purchase(&mut self, slot: EquipmentSlot) -> PurchaseOutcome {
        let outcome = purchase(
            &mut self.state.equipment,
            &mut self.state.resources,
            slot,
            self.state.settings.testing_mode,
        );
        if let PurchaseOutcome::Purchased { slot, level } = outcome {
            info!(slot = slot.name(), level, "equipment purchased");
            self.refresh_hero_stats();
        }
        outcome
    }

    // ── Settings ────────────────────────────────────────────────

    pub fn set_testing_mode(&mut self, enabled: bool) {
        self.state.settings.set_testing_mode(enabled);
    }

    pub fn set_math_difficulty(&mut self, difficulty: u8) {
        self.state.settings.set_math_difficulty(difficulty);
    }

    pub fn set_resource_multiplier(&mut self, multiplier: u32) {
        self.state.settings.set_resource_multiplier(multiplier);
    }

    // ── Session ─────────────────────────────────────────────────

    /// Starts a brand-new session. Settings are kept.
    pub fn reset(&mut self) {
        let settings = self.state.settings;
        let mut state = GameState::new(&mut self.rng);
        state.settings = settings;
        self.state = state;

        self.pending = None;
        self.scheduler.clear();
        self.scheduler
            .schedule(self.timings.combat_tick_ms, Action::CombatTick);
        self.combat = CombatState::new(
            compute_hero_stats(&self.state.equipment, &self.state.superpower),
            self.roster.template(0, &mut self.rng).to_stats(),
        );
        self.accessible_depth = accessible_depth(&self.state.grid);
        info!("session reset");
    }

    /// Replaces the mine and resets the deepest row. Open or queued digs
    /// refer to the old grid and are dropped.
    pub fn regenerate_mine(&mut self) {
        self.state.grid = generate_mine(&mut self.rng);
        self.state.deepest_row = 0;
        if matches!(self.pending, Some(PendingChallenge::Dig { .. })) {
            self.pending = None;
        }
        self.scheduler
            .cancel_where(|a| matches!(a, Action::ResolveDig { .. }));
        self.accessible_depth = accessible_depth(&self.state.grid);
        info!("mine regenerated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mine::MineGrid;
    use rand_chacha::ChaCha8Rng;

    fn engine_with_grid(grid: MineGrid) -> GameEngine<ChaCha8Rng> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let state = GameState::with_grid(grid, &mut rng);
        GameEngine::from_state(state, rng)
    }

    fn open_grid() -> MineGrid {
        let mut grid = MineGrid::filled_with_size(10, 6, TileType::Dirt);
        grid.set_tile_type(0, 2, TileType::Empty);
        grid
    }

    #[test]
    fn test_dig_flow() {
        let mut engine = engine_with_grid(open_grid());
        let problem = match engine.request_dig(1, 2) {
            DigRequest::Challenge(p) => p,
            other => panic!("expected challenge, got {:?}", other),
        };
        assert_eq!(engine.request_dig(0, 1), DigRequest::Busy);

        let outcome = engine.submit_answer(problem.answer, false);
        assert!(matches!(outcome, AnswerOutcome::DigScheduled { .. }));
        assert!(engine.pending_challenge().is_none());
        // Not credited before the dig delay
        assert_eq!(engine.resources().dirt, 0);

        let events = engine.advance(engine.timings().dig_resolve_ms);
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::DigResolved { tiles_dug: 1, .. })));
        assert_eq!(engine.resources().dirt, 1);
        assert_eq!(engine.state().deepest_row, 1);
        assert_eq!(engine.accessible_depth(), 1);
    }

    #[test]
    fn test_wrong_answer_changes_nothing() {
        let mut engine = engine_with_grid(open_grid());
        let problem = match engine.request_dig(1, 2) {
            DigRequest::Challenge(p) => p,
            other => panic!("expected challenge, got {:?}", other),
        };
        let before = engine.state().clone();
        assert_eq!(
            engine.submit_answer(problem.answer + 1, false),
            AnswerOutcome::Wrong
        );
        engine.advance(1000);
        assert_eq!(engine.state().grid, before.grid);
        assert_eq!(engine.resources(), &before.resources);
    }

    #[test]
    fn test_not_diggable() {
        let mut engine = engine_with_grid(open_grid());
        assert_eq!(engine.request_dig(5, 5), DigRequest::NotDiggable);
        assert_eq!(engine.request_dig(0, 2), DigRequest::NotDiggable);
        assert!(engine.pending_challenge().is_none());
    }

    #[test]
    fn test_easter_egg_claimed_without_problem() {
        let mut grid = open_grid();
        grid.set_tile_type(1, 2, TileType::EasterEgg);
        let mut engine = engine_with_grid(grid);
        match engine.request_dig(1, 2) {
            DigRequest::EasterEgg { kind, amount } => {
                assert!(matches!(kind, ResourceKind::Gold | ResourceKind::Silver));
                assert_eq!(engine.resources().get(kind), amount);
            }
            other => panic!("expected easter egg, got {:?}", other),
        }
        assert!(engine.pending_challenge().is_none());
        assert_eq!(engine.state().grid.tile_type(1, 2), Some(TileType::Empty));
        assert_eq!(engine.state().deepest_row, 1);
    }

    #[test]
    fn test_dynamite_debited_once_for_area_dig() {
        let mut engine = engine_with_grid(open_grid());
        engine.state_mut().resources.add(ResourceKind::Dynamite, 2);
        let problem = match engine.request_dig(1, 2) {
            DigRequest::Challenge(p) => p,
            other => panic!("expected challenge, got {:?}", other),
        };
        engine.submit_answer(problem.answer, true);
        engine.advance(engine.timings().dig_resolve_ms);
        assert_eq!(engine.resources().dynamite, 1);
        // 3x3 around (1,2) minus the already empty (0,2)
        assert_eq!(engine.resources().dirt, 8);
    }

    #[test]
    fn test_dynamite_requested_without_stock_falls_back() {
        let mut engine = engine_with_grid(open_grid());
        let problem = match engine.request_dig(1, 2) {
            DigRequest::Challenge(p) => p,
            other => panic!("expected challenge, got {:?}", other),
        };
        engine.submit_answer(problem.answer, true);
        let events = engine.advance(engine.timings().dig_resolve_ms);
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::DigResolved { area: false, .. })));
        assert_eq!(engine.resources().dirt, 1);
        assert_eq!(engine.resources().dynamite, 0);
    }

    #[test]
    fn test_combat_tick_cadence() {
        let mut engine = engine_with_grid(open_grid());
        let events = engine.advance(engine.timings().combat_tick_ms - 1);
        assert!(events.is_empty());
        let events = engine.advance(1);
        assert_eq!(
            events,
            vec![TickEvent::AttackStarted {
                attacker: Side::Hero
            }]
        );
        let events = engine.advance(engine.timings().attack_windup_ms);
        assert!(matches!(
            events.first(),
            Some(TickEvent::AttackResolved {
                attacker: Side::Hero,
                ..
            })
        ));
        assert_eq!(engine.combat().turn, Side::Monster);
    }

    #[test]
    fn test_monster_defeat_processed_once() {
        let mut engine = engine_with_grid(open_grid());
        engine.combat.monster.hp = 1;
        engine.combat.monster.evasion = 0;

        let events = engine.advance(engine.timings().combat_tick_ms + 2000);
        let defeats = events
            .iter()
            .filter(|e| matches!(e, TickEvent::MonsterDefeated { .. }))
            .count();
        assert_eq!(defeats, 1);
        assert_eq!(engine.state().current_mob_index, 1);
        assert_eq!(engine.resources().dynamite, 1);
        assert_eq!(engine.combat().turn, Side::Hero);
        assert_eq!(engine.combat().monster.hp, engine.combat().monster.max_hp);
    }

    #[test]
    fn test_hero_defeat_heals_both() {
        let mut engine = engine_with_grid(open_grid());
        engine.combat.hero.hp = 0;
        engine.combat.monster.hp = 3;
        engine.on_hero_defeated();
        assert_eq!(engine.combat().hero.hp, engine.combat().hero.max_hp);
        assert_eq!(engine.combat().monster.hp, engine.combat().monster.max_hp);
        assert_eq!(engine.combat().turn, Side::Hero);
        assert_eq!(engine.drain_events(), vec![TickEvent::HeroDefeated]);
    }

    #[test]
    fn test_purchase_refreshes_hero() {
        let mut engine = engine_with_grid(open_grid());
        engine.set_testing_mode(true);
        let outcome = engine.purchase(EquipmentSlot::Weapon);
        assert!(matches!(outcome, PurchaseOutcome::Purchased { level: 1, .. }));
        assert_eq!(engine.combat().hero.attack, 7);
        assert!(engine.resources().is_empty());
    }

    #[test]
    fn test_superpower_flow() {
        let mut engine = engine_with_grid(open_grid());
        let problem = engine.request_superpower().unwrap();
        assert!(engine.request_superpower().is_none());
        assert_eq!(
            engine.submit_answer(problem.answer, false),
            AnswerOutcome::SuperpowerActivated
        );
        assert_eq!(engine.combat().hero.attack, 10);
        assert!(engine.request_superpower().is_none());
    }

    #[test]
    fn test_superpower_wrong_answer_cools_down() {
        let mut engine = engine_with_grid(open_grid());
        let problem = engine.request_superpower().unwrap();
        assert_eq!(
            engine.submit_answer(problem.answer - 1, false),
            AnswerOutcome::SuperpowerFailed
        );
        assert_eq!(engine.combat().hero.attack, 5);
        assert!(!engine.state().superpower.is_ready());
    }

    #[test]
    fn test_cancel_challenge() {
        let mut engine = engine_with_grid(open_grid());
        assert!(matches!(engine.request_dig(1, 2), DigRequest::Challenge(_)));
        engine.cancel_challenge();
        assert!(engine.pending_challenge().is_none());
        assert_eq!(engine.submit_answer(0, false), AnswerOutcome::NoChallenge);
    }

    #[test]
    fn test_regenerate_drops_queued_dig() {
        let mut engine = engine_with_grid(open_grid());
        let problem = match engine.request_dig(1, 2) {
            DigRequest::Challenge(p) => p,
            other => panic!("expected challenge, got {:?}", other),
        };
        engine.submit_answer(problem.answer, false);
        engine.state_mut().deepest_row = 9;
        engine.regenerate_mine();
        assert!(!engine.has_pending_dig());
        assert_eq!(engine.state().deepest_row, 0);
        assert_eq!(engine.state().grid.rows, crate::core::constants::TILE_ROWS);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut engine = engine_with_grid(open_grid());
        engine.set_math_difficulty(5);
        engine.state_mut().resources.add(ResourceKind::Gold, 10);
        engine.state_mut().current_mob_index = 7;
        engine.reset();
        assert!(engine.resources().is_empty());
        assert_eq!(engine.state().current_mob_index, 0);
        assert_eq!(engine.state().settings.math_difficulty, 5);
        assert_eq!(engine.combat().monster.name_key, "mob_1_name");
    }
}
