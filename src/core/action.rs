//! Player actions: the closed set of moves a priority holder can make.
//!
//! - `CastEffectA` / `CastEffectB`: put a fixed damage spell on the stack
//! - `Pass`: give up priority
//!
//! Each cast maps to a [`SpellTemplate`] describing what lands on the stack.
//! Labels and input keys are display data only.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Cast spell A (3 damage to the caster's opponent).
    CastEffectA,
    /// Cast spell B (2 damage to the caster's opponent).
    CastEffectB,
    /// Pass priority.
    Pass,
}

/// What a cast puts on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpellTemplate {
    pub name: &'static str,
    pub damage: u32,
}

pub const SPELL_A: SpellTemplate = SpellTemplate { name: "A", damage: 3 };
pub const SPELL_B: SpellTemplate = SpellTemplate { name: "B", damage: 2 };

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Action; 3] = [Action::CastEffectA, Action::CastEffectB, Action::Pass];

    /// Parse a single input token.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Anything other than `a`, `b` or `p` yields `None`.
    ///
    /// ```
    /// use mtg_engine::core::Action;
    ///
    /// assert_eq!(Action::from_input("A"), Some(Action::CastEffectA));
    /// assert_eq!(Action::from_input(" p\n"), Some(Action::Pass));
    /// assert_eq!(Action::from_input("cast"), None);
    /// ```
    #[must_use]
    pub fn from_input(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Action::CastEffectA),
            "b" => Some(Action::CastEffectB),
            "p" => Some(Action::Pass),
            _ => None,
        }
    }

    /// Input key for this action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Action::CastEffectA => 'a',
            Action::CastEffectB => 'b',
            Action::Pass => 'p',
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::CastEffectA => "Cast Spell A",
            Action::CastEffectB => "Cast Spell B",
            Action::Pass => "Pass",
        }
    }

    /// The spell this action casts, or `None` for `Pass`.
    #[must_use]
    pub const fn spell(self) -> Option<SpellTemplate> {
        match self {
            Action::CastEffectA => Some(SPELL_A),
            Action::CastEffectB => Some(SPELL_B),
            Action::Pass => None,
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a user input token into an action. See [`Action::from_input`].
#[must_use]
pub fn action_from_input(token: &str) -> Option<Action> {
    Action::from_input(token)
}

/// Display label for an action. See [`Action::label`].
#[must_use]
pub fn action_label(action: Action) -> &'static str {
    action.label()
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
