//! Game configuration.
//!
//! Callers configure a game at startup with a `GameConfig`. The rules
//! themselves are fixed; only the starting life total and the safety cap
//! for automated play vary.

use serde::{Deserialize, Serialize};

/// Starting life total when none is given.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// Cap on applied actions when controllers drive a game unattended.
pub const DEFAULT_MAX_ACTIONS: u32 = 1000;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Life each player starts with. Always positive.
    pub starting_life: i64,

    /// Maximum number of actions an automated play-out may apply.
    /// `0` means unlimited.
    pub max_actions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            max_actions: DEFAULT_MAX_ACTIONS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given starting life.
    pub fn new(starting_life: i64) -> Self {
        Self::default().with_starting_life(starting_life)
    }

    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        assert!(life > 0, "Starting life must be positive");
        self.starting_life = life;
        self
    }

    /// Set the automated play-out cap.
    #[must_use]
    pub fn with_max_actions(mut self, max: u32) -> Self {
        self.max_actions = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_life, 20);
        assert_eq!(config.max_actions, 1000);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(40).with_max_actions(50);
        assert_eq!(config.starting_life, 40);
        assert_eq!(config.max_actions, 50);
    }

    #[test]
    #[should_panic(expected = "Starting life must be positive")]
    fn test_zero_life_rejected() {
        let _ = GameConfig::new(0);
    }
}
