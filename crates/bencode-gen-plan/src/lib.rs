//! Encoding plans for bencode-gen.
//!
//! This crate contains:
//! - The plan instruction set (literals, typed writes, loops, conditionals)
//! - Selectors describing how to reach a value from the root
//! - Constant folding of adjacent literals
//! - A human-readable plan dump

pub mod dump;
pub mod fold;
pub mod instruction;
pub mod plan;
pub mod selector;

pub use dump::dump;
pub use fold::fold;
pub use instruction::{EmptinessTest, Instruction};
pub use plan::{Plan, PlanFeatures};
pub use selector::Selector;

#[cfg(test)]
mod plan_tests;
