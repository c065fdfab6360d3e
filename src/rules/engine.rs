//! The game engine: legal actions, the transition algorithm, and
//! win/loss detection.

use smallvec::SmallVec;
use tracing::{debug, error, trace};

use crate::core::{Action, ActionRecord, GameConfig, GameState, PlayerId, SpellTemplate, SPELL_A, SPELL_B};
use crate::error::InvariantViolation;
use crate::stack::StackEffect;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players fell to 0 or below together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Owns a game's state and drives it forward one action at a time.
///
/// ## Transitions
///
/// Casting a spell:
/// 1. Push the spell onto the stack
/// 2. Reset the pass streak
/// 3. Give priority to the opponent
///
/// Passing:
/// 1. Bump the pass streak and give priority to the opponent
/// 2. On the second consecutive pass, either resolve the top of the stack
///    (damage to its controller's opponent, priority back to the active
///    player) or, with an empty stack, start the next turn for the other
///    player
///
/// Every transition ends with an invariant check. A failure there is an
/// engine defect and panics.
///
/// ## Example
///
/// ```
/// use mtg_engine::core::{Action, PlayerId};
/// use mtg_engine::rules::GameEngine;
///
/// let mut engine = GameEngine::new(20);
/// engine.apply(Action::CastEffectA);
/// engine.apply(Action::Pass);
/// engine.apply(Action::Pass);
///
/// assert_eq!(engine.state().life(PlayerId::new(1)), 17);
/// assert!(!engine.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    history: Vec<ActionRecord>,
    sequence: u32,
}

impl GameEngine {
    /// Start a game with both players at `starting_life`.
    ///
    /// # Panics
    ///
    /// If `starting_life` is not positive.
    #[must_use]
    pub fn new(starting_life: i64) -> Self {
        Self::from_valid_state(GameState::new(starting_life))
    }

    /// Start a game from a configuration.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_valid_state(GameState::from_config(config))
    }

    /// Adopt an existing snapshot, e.g. to explore a line of play from it.
    ///
    /// # Errors
    ///
    /// Returns the violated invariant if the snapshot is not a state a
    /// completed transition could have produced.
    pub fn from_state(state: GameState) -> Result<Self, InvariantViolation> {
        state.check_invariants()?;
        Ok(Self::from_valid_state(state))
    }

    fn from_valid_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
            sequence: 0,
        }
    }

    /// Read-only view of the live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An independent copy of the live state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Every action applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Player entitled to act next.
    #[must_use]
    pub fn priority_player(&self) -> PlayerId {
        self.state.priority_player
    }

    /// Actions available to the priority holder.
    ///
    /// Always all three: there are no costs or timing restrictions.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[Action; 3]> {
        SmallVec::from_slice(&Action::ALL)
    }

    /// Apply an action for the current priority holder.
    ///
    /// # Panics
    ///
    /// If the resulting state breaks an invariant. That can only happen
    /// through an engine bug.
    pub fn apply(&mut self, action: Action) {
        let player = self.state.priority_player;
        trace!(%player, %action, turn = self.state.turn, "applying action");

        self.history.push(ActionRecord::new(player, action, self.state.turn, self.sequence));
        self.sequence += 1;

        match action {
            Action::CastEffectA => self.cast(player, SPELL_A),
            Action::CastEffectB => self.cast(player, SPELL_B),
            Action::Pass => self.pass(player),
        }

        if let Err(violation) = self.state.check_invariants() {
            error!(%violation, state = ?self.state, "game invariant violated");
            panic!("game invariant violated after {action}: {violation}");
        }
    }

    fn cast(&mut self, player: PlayerId, spell: SpellTemplate) {
        debug!(%player, spell = spell.name, damage = spell.damage, "spell cast");
        self.state.stack.push(StackEffect::from_spell(spell, player));
        self.state.pass_streak = 0;
        self.state.priority_player = player.opponent();
    }

    fn pass(&mut self, player: PlayerId) {
        self.state.pass_streak += 1;
        self.state.priority_player = player.opponent();

        if self.state.pass_streak < 2 {
            return;
        }

        if self.state.stack.is_empty() {
            self.advance_turn();
        } else {
            self.resolve_top();
        }
    }

    fn resolve_top(&mut self) {
        let effect = self
            .state
            .stack
            .pop()
            .expect("resolve_top is only reached with a non-empty stack");
        let target = effect.target();
        self.state.players[target].life -= i64::from(effect.damage);
        debug!(
            effect = %effect,
            %target,
            life = self.state.players[target].life,
            "stack resolved"
        );

        self.state.pass_streak = 0;
        self.state.priority_player = self.state.active_player;
    }

    fn advance_turn(&mut self) {
        self.state.turn += 1;
        self.state.active_player = self.state.active_player.opponent();
        self.state.pass_streak = 0;
        self.state.priority_player = self.state.active_player;
        self.sequence = 0;
        debug!(turn = self.state.turn, active = %self.state.active_player, "turn advanced");
    }

    /// True once any player is at 0 life or below.
    ///
    /// `apply` does not stop on its own; callers stop driving the game here.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.players.values().any(|p| !p.is_alive())
    }

    /// The sole surviving player once the game is over.
    ///
    /// `None` while the game continues or when both players are down.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result().and_then(|r| r.winner())
    }

    /// How the game ended, or `None` if it is still in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let mut alive = self.state.alive_players();
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(GameResult::Winner(winner)),
            _ => Some(GameResult::Draw),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerState;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(P1);
        assert!(!result.is_winner(P0));
        assert!(result.is_winner(P1));
        assert_eq!(result.winner(), Some(P1));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(P0));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_legal_actions_always_all_three() {
        let mut engine = GameEngine::default();
        assert_eq!(engine.legal_actions().as_slice(), &Action::ALL);

        engine.apply(Action::CastEffectA);
        assert_eq!(engine.legal_actions().as_slice(), &Action::ALL);
    }

    #[test]
    fn test_cast_pushes_and_flips_priority() {
        let mut engine = GameEngine::default();
        engine.apply(Action::Pass);
        assert_eq!(engine.state().pass_streak, 1);

        engine.apply(Action::CastEffectB);
        let state = engine.state();
        assert_eq!(state.pass_streak, 0);
        assert_eq!(state.priority_player, P0);
        assert_eq!(state.stack.peek(), Some(&StackEffect::new("B", P1, 2)));
    }

    #[test]
    fn test_resolution_returns_priority_to_active_player() {
        let mut engine = GameEngine::default();
        engine.apply(Action::Pass); // P0 passes, priority to P1
        engine.apply(Action::CastEffectA); // P1 casts, priority to P0
        engine.apply(Action::Pass);
        engine.apply(Action::Pass); // resolves

        let state = engine.state();
        assert_eq!(state.life(P0), 17);
        assert_eq!(state.active_player, P0);
        assert_eq!(state.priority_player, P0);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn test_history_records_actions() {
        let mut engine = GameEngine::default();
        engine.apply(Action::CastEffectA);
        engine.apply(Action::Pass);
        engine.apply(Action::Pass); // resolves A
        engine.apply(Action::Pass);
        engine.apply(Action::Pass); // turn 2
        engine.apply(Action::CastEffectB);

        let history = engine.history();
        assert_eq!(history.len(), 6);
        assert_eq!(history[0], ActionRecord::new(P0, Action::CastEffectA, 1, 0));
        assert_eq!(history[1], ActionRecord::new(P1, Action::Pass, 1, 1));
        assert_eq!(history[4], ActionRecord::new(P1, Action::Pass, 1, 4));
        assert_eq!(history[5], ActionRecord::new(P1, Action::CastEffectB, 2, 0));
    }

    #[test]
    fn test_result_and_winner() {
        let mut state = GameState::default();
        let engine = GameEngine::from_state(state.clone()).unwrap();
        assert_eq!(engine.result(), None);
        assert_eq!(engine.winner(), None);

        state.players[P1].life = 0;
        let engine = GameEngine::from_state(state.clone()).unwrap();
        assert!(engine.is_over());
        assert_eq!(engine.result(), Some(GameResult::Winner(P0)));
        assert_eq!(engine.winner(), Some(P0));

        state.players[P0].life = -1;
        let engine = GameEngine::from_state(state).unwrap();
        assert!(engine.is_over());
        assert_eq!(engine.result(), Some(GameResult::Draw));
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_from_state_rejects_broken_snapshot() {
        let mut state = GameState::default();
        state.pass_streak = 2;
        assert_eq!(
            GameEngine::from_state(state).unwrap_err(),
            InvariantViolation::PassStreak(2)
        );
    }

    #[test]
    #[should_panic(expected = "game invariant violated")]
    fn test_apply_panics_on_corrupted_state() {
        let mut engine = GameEngine::default();
        engine.state.active_player = PlayerId::new(3);
        engine.apply(Action::CastEffectA);
    }

    #[test]
    #[should_panic(expected = "game invariant violated")]
    fn test_apply_panics_on_missing_player() {
        let mut engine = GameEngine::default();
        engine.state.players = crate::core::PlayerMap::with_value(1, PlayerState::new(20));
        engine.apply(Action::CastEffectA);
    }

    #[test]
    #[should_panic(expected = "Starting life must be positive")]
    fn test_new_rejects_zero_life() {
        let _ = GameEngine::new(0);
    }
}
