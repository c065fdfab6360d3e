//! Controllers: who picks the next action for a seat.
//!
//! A controller looks at the engine read-only and returns an action for
//! the priority holder. Returning `None` means the controller has nothing
//! more to say (a script ran out, a human walked away) and whoever drives
//! the game should stop.

mod random;
mod scripted;

pub use random::RandomController;
pub use scripted::ScriptedController;

use crate::core::{Action, PlayerId};
use crate::rules::GameEngine;

/// Chooses actions for one seat.
pub trait Controller {
    /// Choose an action for `player`, who currently holds priority.
    fn choose_action(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Action>;

    /// Short name for logs and summaries.
    fn name(&self) -> &str;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn choose_action(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Action> {
        (**self).choose_action(engine, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
