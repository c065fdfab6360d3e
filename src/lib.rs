//! # mtg-engine
//!
//! A two-player priority and stack resolution engine.
//!
//! Players alternate holding priority. The priority holder either casts one
//! of two fixed damage spells, which goes on a last-in-first-out stack, or
//! passes. Two consecutive passes resolve the top of the stack, or start the
//! next turn when the stack is empty. A player at 0 life or below has lost.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: [`GameEngine`] owns the [`GameState`] and only lends
//!    it out read-only. Snapshots are explicit clones.
//!
//! 2. **Closed action set**: [`Action`] is an enum matched exhaustively in
//!    the transition function.
//!
//! 3. **Defects are loud**: every transition re-checks the state invariants
//!    and panics if one is broken.
//!
//! ## Modules
//!
//! - `core`: players, actions, state, RNG, configuration
//! - `stack`: stack effects and the LIFO stack
//! - `rules`: the engine (transitions, terminal detection)
//! - `controllers`: automated and scripted players
//! - `simulation`: unattended play-outs and batch self-play
//! - `cli`: text front end

pub mod core;
pub mod error;
pub mod stack;
pub mod rules;
pub mod controllers;
pub mod simulation;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    action_from_input, action_label, Action, ActionRecord, GameConfig, GameRng, GameState,
    PlayerId, PlayerMap, PlayerState,
};

pub use crate::error::{InvariantViolation, StackError};

pub use crate::stack::{Stack, StackEffect};

pub use crate::rules::{GameEngine, GameResult};

pub use crate::controllers::{Controller, RandomController, ScriptedController};

pub use crate::simulation::{play_out, simulate, PlayOutEnd, SimulationSummary};
