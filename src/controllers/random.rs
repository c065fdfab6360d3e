use tracing::trace;

use super::Controller;
use crate::core::{Action, GameRng, PlayerId};
use crate::rules::GameEngine;

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: GameRng,
}

impl RandomController {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Controller for RandomController {
    fn choose_action(&mut self, engine: &GameEngine, player: PlayerId) -> Option<Action> {
        let actions = engine.legal_actions();
        let action = self.rng.choose(actions.as_slice()).copied();
        trace!(%player, ?action, "random choice");
        action
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_chooses_legal_action() {
        let engine = GameEngine::default();
        let mut controller = RandomController::from_seed(7);

        for _ in 0..50 {
            let action = controller.choose_action(&engine, engine.priority_player());
            assert!(action.is_some_and(|a| Action::ALL.contains(&a)));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let engine = GameEngine::default();
        let mut first = RandomController::from_seed(99);
        let mut second = RandomController::from_seed(99);

        for _ in 0..20 {
            let player = engine.priority_player();
            assert_eq!(
                first.choose_action(&engine, player),
                second.choose_action(&engine, player)
            );
        }
    }
}
