//! The rules engine.
//!
//! [`GameEngine`] owns the game state and implements:
//! - Legal actions for the priority holder
//! - How actions modify state
//! - Win/loss conditions

pub mod engine;

pub use engine::{GameEngine, GameResult};
