//! Core engine types: players, state, actions, RNG, configuration.
//!
//! This module contains the building blocks the rules engine operates on.
//! Nothing here knows how a transition works; see [`crate::rules`].

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PlayerState, SEAT_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MAX_ACTIONS, DEFAULT_STARTING_LIFE};
pub use action::{action_from_input, action_label, Action, ActionRecord, SpellTemplate, SPELL_A, SPELL_B};
pub use state::GameState;
