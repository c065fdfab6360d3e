//! Stack entries.

use serde::{Deserialize, Serialize};

use crate::core::action::SpellTemplate;
use crate::core::PlayerId;

/// A spell waiting on the stack.
///
/// Immutable once created: the engine builds one per cast and drops it when
/// it resolves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackEffect {
    /// Display name.
    pub name: String,

    /// Who cast it.
    pub controller: PlayerId,

    /// Damage dealt to the controller's opponent on resolution.
    pub damage: u32,
}

impl StackEffect {
    #[must_use]
    pub fn new(name: impl Into<String>, controller: PlayerId, damage: u32) -> Self {
        Self {
            name: name.into(),
            controller,
            damage,
        }
    }

    /// Build the effect a spell template produces for its caster.
    #[must_use]
    pub fn from_spell(spell: SpellTemplate, controller: PlayerId) -> Self {
        Self::new(spell.name, controller, spell.damage)
    }

    /// The player this effect damages.
    #[must_use]
    pub fn target(&self) -> PlayerId {
        self.controller.opponent()
    }
}

impl std::fmt::Display for StackEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {} dmg)", self.name, self.controller, self.damage)
    }
}
