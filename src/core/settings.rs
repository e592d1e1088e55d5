//! Player-facing settings.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_MATH_DIFFICULTY, MAX_MATH_DIFFICULTY, MAX_RESOURCE_MULTIPLIER,
    MAX_TESTING_RESOURCE_MULTIPLIER, MIN_MATH_DIFFICULTY, MIN_RESOURCE_MULTIPLIER,
};

/// Session settings. Changes apply to the next operation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Purchases cost nothing and the multiplier range widens.
    #[serde(default)]
    pub testing_mode: bool,
    #[serde(default = "default_math_difficulty")]
    pub math_difficulty: u8,
    #[serde(default = "default_resource_multiplier")]
    pub resource_multiplier: u32,
}

fn default_math_difficulty() -> u8 {
    DEFAULT_MATH_DIFFICULTY
}

fn default_resource_multiplier() -> u32 {
    MIN_RESOURCE_MULTIPLIER
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            testing_mode: false,
            math_difficulty: DEFAULT_MATH_DIFFICULTY,
            resource_multiplier: MIN_RESOURCE_MULTIPLIER,
        }
    }
}

impl Settings {
    pub fn max_resource_multiplier(&self) -> u32 {
        if self.testing_mode {
            MAX_TESTING_RESOURCE_MULTIPLIER
        } else {
            MAX_RESOURCE_MULTIPLIER
        }
    }

    pub fn set_math_difficulty(&mut self, difficulty: u8) {
        self.math_difficulty = difficulty.clamp(MIN_MATH_DIFFICULTY, MAX_MATH_DIFFICULTY);
    }

    pub fn set_resource_multiplier(&mut self, multiplier: u32) {
        self.resource_multiplier =
            multiplier.clamp(MIN_RESOURCE_MULTIPLIER, self.max_resource_multiplier());
    }

    /// Leaving testing mode pulls the multiplier back into the normal range.
    pub fn set_testing_mode(&mut self, enabled: bool) {
        self.testing_mode = enabled;
        self.set_resource_multiplier(self.resource_multiplier);
    }

    /// Re-applies every clamp, for values read from untrusted input.
    pub fn sanitized(mut self) -> Self {
        self.set_math_difficulty(self.math_difficulty);
        self.set_resource_multiplier(self.resource_multiplier);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.testing_mode);
        assert_eq!(s.math_difficulty, 3);
        assert_eq!(s.resource_multiplier, 1);
    }

    #[test]
    fn test_math_difficulty_clamped() {
        let mut s = Settings::default();
        s.set_math_difficulty(0);
        assert_eq!(s.math_difficulty, 1);
        s.set_math_difficulty(9);
        assert_eq!(s.math_difficulty, 5);
    }

    #[test]
    fn test_multiplier_range_depends_on_testing_mode() {
        let mut s = Settings::default();
        s.set_resource_multiplier(50);
        assert_eq!(s.resource_multiplier, 10);

        s.set_testing_mode(true);
        s.set_resource_multiplier(50);
        assert_eq!(s.resource_multiplier, 50);

        s.set_testing_mode(false);
        assert_eq!(s.resource_multiplier, 10);
    }

    #[test]
    fn test_sanitized() {
        let s = Settings {
            testing_mode: false,
            math_difficulty: 0,
            resource_multiplier: 0,
        }
        .sanitized();
        assert_eq!(s.math_difficulty, 1);
        assert_eq!(s.resource_multiplier, 1);
    }
}
