//! Last-in-first-out effect container.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::StackEffect;
use crate::error::StackError;

/// The game stack.
///
/// Storage runs bottom to top (last element is the top). Backed by a
/// persistent vector, so cloning a stack is O(1) and the clone can be
/// pushed and popped without touching the original.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    entries: Vector<StackEffect>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an effect onto the top.
    pub fn push(&mut self, effect: StackEffect) {
        self.entries.push_back(effect);
    }

    /// Remove and return the top effect.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<StackEffect, StackError> {
        self.entries.pop_back().ok_or(StackError::Empty)
    }

    /// The top effect, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&StackEffect> {
        self.entries.back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &StackEffect> {
        self.entries.iter().rev()
    }

    /// One display line per effect, top first.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}
