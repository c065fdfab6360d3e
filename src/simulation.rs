//! Unattended play: drive an engine with two controllers until it ends.
//!
//! Used by the `simulate` command for random self-play and by tests to push
//! the engine through long action sequences.

use tracing::{debug, info};

use crate::controllers::{Controller, RandomController};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, SEAT_COUNT};
use crate::rules::{GameEngine, GameResult};

/// Why a play-out stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutEnd {
    /// The game reached a terminal state.
    Finished(GameResult),
    /// A controller returned no action.
    Stalled(PlayerId),
    /// The action cap was hit first.
    ActionLimit,
}

/// Drive `engine` until it is over, a controller gives up, or
/// `max_actions` actions have been applied (`0` means no cap).
///
/// `seats[i]` chooses for `PlayerId(i)`.
pub fn play_out(
    engine: &mut GameEngine,
    mut seats: [&mut dyn Controller; SEAT_COUNT],
    max_actions: u32,
) -> PlayOutEnd {
    let mut applied = 0u32;

    loop {
        if let Some(result) = engine.result() {
            return PlayOutEnd::Finished(result);
        }
        if max_actions > 0 && applied >= max_actions {
            return PlayOutEnd::ActionLimit;
        }

        let player = engine.priority_player();
        let Some(action) = seats[player.index()].choose_action(engine, player) else {
            return PlayOutEnd::Stalled(player);
        };
        engine.apply(action);
        applied += 1;
    }
}

/// Tally of a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSummary {
    pub games: u32,
    pub wins: PlayerMap<u32>,
    pub draws: u32,
    /// Games cut off by the action cap.
    pub unfinished: u32,
    pub total_actions: u64,
}

impl SimulationSummary {
    fn new() -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(SEAT_COUNT, 0),
            draws: 0,
            unfinished: 0,
            total_actions: 0,
        }
    }

    fn record(&mut self, end: PlayOutEnd, actions: usize) {
        self.games += 1;
        self.total_actions += actions as u64;
        match end {
            PlayOutEnd::Finished(GameResult::Winner(p)) => self.wins[p] += 1,
            PlayOutEnd::Finished(GameResult::Draw) => self.draws += 1,
            PlayOutEnd::Stalled(_) | PlayOutEnd::ActionLimit => self.unfinished += 1,
        }
    }
}

/// Play `games` random-vs-random games. Same seed, same summary.
pub fn simulate(config: &GameConfig, games: u32, seed: u64) -> SimulationSummary {
    let mut rng = GameRng::new(seed);
    let mut summary = SimulationSummary::new();

    for game in 0..games {
        let mut engine = GameEngine::with_config(config);
        let mut p0 = RandomController::new(rng.fork());
        let mut p1 = RandomController::new(rng.fork());

        let end = play_out(&mut engine, [&mut p0, &mut p1], config.max_actions);
        debug!(game, ?end, actions = engine.history().len(), turn = engine.state().turn, "game finished");
        summary.record(end, engine.history().len());
    }

    info!(
        games = summary.games,
        p0_wins = summary.wins[PlayerId::new(0)],
        p1_wins = summary.wins[PlayerId::new(1)],
        draws = summary.draws,
        unfinished = summary.unfinished,
        "simulation complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::ScriptedController;
    use crate::core::Action;

    #[test]
    fn test_play_out_stalls_when_script_ends() {
        let mut engine = GameEngine::default();
        let mut p0 = ScriptedController::new([Action::CastEffectA]);
        let mut p1 = ScriptedController::default();

        let end = play_out(&mut engine, [&mut p0, &mut p1], 0);
        assert_eq!(end, PlayOutEnd::Stalled(PlayerId::new(1)));
        assert_eq!(engine.state().stack.len(), 1);
    }

    #[test]
    fn test_play_out_respects_action_limit() {
        let mut engine = GameEngine::default();
        let mut p0 = ScriptedController::new([Action::Pass; 10]);
        let mut p1 = ScriptedController::new([Action::Pass; 10]);

        let end = play_out(&mut engine, [&mut p0, &mut p1], 4);
        assert_eq!(end, PlayOutEnd::ActionLimit);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.state().turn, 3);
    }

    #[test]
    fn test_play_out_finishes() {
        let mut engine = GameEngine::new(5);
        let mut p0 = ScriptedController::new([
            Action::CastEffectA,
            Action::Pass,
            Action::CastEffectA,
            Action::Pass,
        ]);
        let mut p1 = ScriptedController::new([Action::Pass, Action::Pass]);

        let end = play_out(&mut engine, [&mut p0, &mut p1], 0);
        assert_eq!(end, PlayOutEnd::Finished(GameResult::Winner(PlayerId::new(0))));
        assert_eq!(engine.state().life(PlayerId::new(1)), -1);
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let config = GameConfig::new(10);
        let first = simulate(&config, 20, 1234);
        let second = simulate(&config, 20, 1234);

        assert_eq!(first, second);
        assert_eq!(first.games, 20);
        assert_eq!(
            first.wins[PlayerId::new(0)] + first.wins[PlayerId::new(1)] + first.draws + first.unfinished,
            20
        );
    }
}
