//! The stack: spells waiting to resolve.
//!
//! Casting pushes a [`StackEffect`] onto the [`Stack`]; a completed double
//! pass pops exactly one effect off the top and applies its damage. The
//! engine in [`crate::rules`] decides when that happens.
//!
//! ## Example Usage
//!
//! ```
//! use mtg_engine::core::PlayerId;
//! use mtg_engine::stack::{Stack, StackEffect};
//!
//! let mut stack = Stack::new();
//! stack.push(StackEffect::new("A", PlayerId::new(0), 3));
//! stack.push(StackEffect::new("B", PlayerId::new(1), 2));
//!
//! assert_eq!(stack.describe(), vec!["B (P1, 2 dmg)", "A (P0, 3 dmg)"]);
//! assert_eq!(stack.pop().map(|e| e.name), Ok("B".to_string()));
//! ```

mod entry;
mod lifo;

pub use entry::StackEffect;
pub use lifo::Stack;
