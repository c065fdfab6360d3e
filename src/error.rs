//! Error types for the engine.
//!
//! Two families exist:
//! - [`StackError`]: misuse of the stack container itself.
//! - [`InvariantViolation`]: a game state that breaks one of the engine's
//!   postconditions. The engine treats these as defects and panics when one
//!   shows up after a transition.

use thiserror::Error;

use crate::core::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("cannot pop from an empty stack")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("priority_player must be P0 or P1, got {0}")]
    PriorityPlayerOutOfRange(PlayerId),

    #[error("active_player must be P0 or P1, got {0}")]
    ActivePlayerOutOfRange(PlayerId),

    #[error("players must have exactly 2 entries, got {0}")]
    PlayerCount(usize),

    #[error("pass_streak must be 0 or 1 between transitions, got {0}")]
    PassStreak(u8),

    #[error("turn must be positive, got {0}")]
    Turn(u32),

    #[error("stack effect controlled by {0}, who is not a seat")]
    StackController(PlayerId),
}
