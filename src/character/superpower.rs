use serde::{Deserialize, Serialize};

use crate::core::constants::{SUPERPOWER_COOLDOWN_TURNS, SUPERPOWER_DURATION_TURNS};

/// Cooldown and remaining buff turns of the hero's superpower.
///
/// Both counters tick down once per hero turn. The buff only applies while
/// more than one turn is left, so the final countdown turn is unbuffed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpowerState {
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub turns_left: u32,
}

impl SuperpowerState {
    pub fn is_active(&self) -> bool {
        self.turns_left > 1
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Records an answered superpower challenge. Any answer starts the
    /// cooldown; only a correct one starts the buff.
    pub fn resolve(&mut self, correct: bool) {
        self.cooldown = SUPERPOWER_COOLDOWN_TURNS;
        if correct {
            self.turns_left = SUPERPOWER_DURATION_TURNS;
        }
    }

    /// Counts down one turn. Returns true when the buff state flipped.
    pub fn tick_turn(&mut self) -> bool {
        let was_active = self.is_active();
        self.cooldown = self.cooldown.saturating_sub(1);
        self.turns_left = self.turns_left.saturating_sub(1);
        was_active != self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_activates() {
        let mut sp = SuperpowerState::default();
        assert!(sp.is_ready());
        sp.resolve(true);
        assert!(sp.is_active());
        assert!(!sp.is_ready());
        assert_eq!(sp.cooldown, SUPERPOWER_COOLDOWN_TURNS);
    }

    #[test]
    fn test_wrong_answer_only_cools_down() {
        let mut sp = SuperpowerState::default();
        sp.resolve(false);
        assert!(!sp.is_active());
        assert_eq!(sp.cooldown, SUPERPOWER_COOLDOWN_TURNS);
    }

    #[test]
    fn test_buff_lasts_two_turns() {
        let mut sp = SuperpowerState::default();
        sp.resolve(true);
        assert!(!sp.tick_turn());
        assert!(sp.is_active());
        // 3 -> 2 -> 1: inactive on the last counted turn
        assert!(sp.tick_turn());
        assert!(!sp.is_active());
        assert!(!sp.tick_turn());
        assert_eq!(sp.turns_left, 0);
    }

    #[test]
    fn test_cooldown_saturates() {
        let mut sp = SuperpowerState::default();
        sp.resolve(false);
        for _ in 0..SUPERPOWER_COOLDOWN_TURNS + 5 {
            sp.tick_turn();
        }
        assert!(sp.is_ready());
    }
}
