use std::collections::VecDeque;

use super::Controller;
use crate::core::{Action, PlayerId};
use crate::rules::GameEngine;

/// Replays a fixed sequence of actions, then yields `None`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    script: VecDeque<Action>,
}

impl ScriptedController {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Build a script from input keys, e.g. `"a p p"` or `"a,p,p"`.
    ///
    /// Returns `None` if any token is not an action key.
    #[must_use]
    pub fn from_keys(keys: &str) -> Option<Self> {
        keys.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(Action::from_input)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Controller for ScriptedController {
    fn choose_action(&mut self, _engine: &GameEngine, _player: PlayerId) -> Option<Action> {
        self.script.pop_front()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let engine = GameEngine::default();
        let mut controller = ScriptedController::new([Action::CastEffectB, Action::Pass]);
        let player = engine.priority_player();

        assert_eq!(controller.choose_action(&engine, player), Some(Action::CastEffectB));
        assert_eq!(controller.remaining(), 1);
        assert_eq!(controller.choose_action(&engine, player), Some(Action::Pass));
        assert_eq!(controller.choose_action(&engine, player), None);
    }

    #[test]
    fn test_from_keys() {
        let controller = ScriptedController::from_keys("a, B p").unwrap();
        assert_eq!(controller.remaining(), 3);

        assert!(ScriptedController::from_keys("a x").is_none());
        assert_eq!(ScriptedController::from_keys("").map(|c| c.remaining()), Some(0));
    }
}
