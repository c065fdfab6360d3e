//! Game state: the authoritative snapshot of a game.
//!
//! ## GameState
//!
//! - Turn number, active player, priority holder
//! - Consecutive pass count
//! - Per-player life totals
//! - The stack
//!
//! The engine owns the live state and lends it out read-only. Cloning a
//! state is the snapshot operation: the clone is fully independent and
//! cheap, since the stack is a persistent vector.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap, PlayerState, SEAT_COUNT};
use crate::error::InvariantViolation;
use crate::stack::Stack;

/// Complete state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Turn number (starts at 1, never decreases).
    pub turn: u32,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Player currently entitled to act.
    pub priority_player: PlayerId,

    /// Consecutive passes since the last cast, resolution or new turn.
    /// Between transitions this is 0 or 1.
    pub pass_streak: u8,

    /// Per-player state, always exactly two entries.
    pub players: PlayerMap<PlayerState>,

    /// Spells waiting to resolve.
    pub stack: Stack,
}

impl GameState {
    /// Create the opening state: turn 1, player 0 active with priority,
    /// both players at `starting_life`, empty stack.
    #[must_use]
    pub fn new(starting_life: i64) -> Self {
        assert!(starting_life > 0, "Starting life must be positive");

        Self {
            turn: 1,
            active_player: PlayerId::FIRST,
            priority_player: PlayerId::FIRST,
            pass_streak: 0,
            players: PlayerMap::with_value(SEAT_COUNT, PlayerState::new(starting_life)),
            stack: Stack::new(),
        }
    }

    /// Create the opening state for a configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.starting_life)
    }

    /// The other seat.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }

    /// Life total of a player.
    #[must_use]
    pub fn life(&self, player: PlayerId) -> i64 {
        self.players[player].life
    }

    /// Players still above 0 life, in seat order.
    pub fn alive_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
    }

    /// Check every postcondition a completed transition must satisfy.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.priority_player.is_seat() {
            return Err(InvariantViolation::PriorityPlayerOutOfRange(self.priority_player));
        }
        if !self.active_player.is_seat() {
            return Err(InvariantViolation::ActivePlayerOutOfRange(self.active_player));
        }
        if self.players.player_count() != SEAT_COUNT {
            return Err(InvariantViolation::PlayerCount(self.players.player_count()));
        }
        if self.pass_streak > 1 {
            return Err(InvariantViolation::PassStreak(self.pass_streak));
        }
        if self.turn < 1 {
            return Err(InvariantViolation::Turn(self.turn));
        }
        if let Some(effect) = self.stack.iter().find(|e| !e.controller.is_seat()) {
            return Err(InvariantViolation::StackController(effect.controller));
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
