//! Virtual-time action queue.
//!
//! All delays in the game (combat cadence, attack wind-up, defeat handling,
//! dig resolution) are expressed as actions due at a virtual millisecond.
//! Actions due at the same instant run in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::constants::{
    ATTACK_RECOVERY_MS, ATTACK_WINDUP_MS, COMBAT_TICK_MS, DEFEAT_DELAY_MS, DIG_RESOLVE_MS,
};
use crate::combat::Side;

/// Something the engine will do once its due time is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CombatTick,
    ResolveAttack(Side),
    SettleAttack(Side),
    ProcessDefeat(Side),
    ResolveDig {
        row: usize,
        col: usize,
        use_dynamite: bool,
    },
}

/// Durations between the beats of the game, in virtual milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub combat_tick_ms: u64,
    pub attack_windup_ms: u64,
    pub attack_recovery_ms: u64,
    pub defeat_delay_ms: u64,
    pub dig_resolve_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            combat_tick_ms: COMBAT_TICK_MS,
            attack_windup_ms: ATTACK_WINDUP_MS,
            attack_recovery_ms: ATTACK_RECOVERY_MS,
            defeat_delay_ms: DEFEAT_DELAY_MS,
            dig_resolve_ms: DIG_RESOLVE_MS,
        }
    }
}

impl Timings {
    /// Every presentation delay collapsed to zero. The combat cadence is kept
    /// (it must stay positive) so ordering between beats is unchanged.
    pub fn instant() -> Self {
        Self {
            combat_tick_ms: COMBAT_TICK_MS,
            attack_windup_ms: 0,
            attack_recovery_ms: 0,
            defeat_delay_ms: 0,
            dig_resolve_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    due: u64,
    seq: u64,
    action: Action,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u64, action: Action) {
        let scheduled = Scheduled {
            due: self.now.saturating_add(delay_ms),
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(scheduled));
    }

    /// Pops the earliest action due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<Action> {
        let due = self.queue.peek().map(|Reverse(s)| s.due)?;
        if due > until {
            return None;
        }
        let Reverse(scheduled) = self.queue.pop()?;
        self.now = self.now.max(scheduled.due);
        Some(scheduled.action)
    }

    /// Moves the clock forward without running anything.
    pub fn advance_clock(&mut self, to: u64) {
        self.now = self.now.max(to);
    }

    /// Drops every queued action matching `pred`.
    pub fn cancel_where(&mut self, pred: impl Fn(&Action) -> bool) {
        let kept: Vec<_> = self
            .queue
            .drain()
            .filter(|Reverse(s)| !pred(&s.action))
            .collect();
        self.queue = kept.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn contains(&self, pred: impl Fn(&Action) -> bool) -> bool {
        self.queue.iter().any(|Reverse(s)| pred(&s.action))
    }
}
