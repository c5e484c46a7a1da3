//! Reference interpreter for bencode-gen encoding plans.
//!
//! Executes a plan against a dynamic [`Value`] and writes the bytes the
//! generated encoder would write for the same data.

pub mod engine;

pub use engine::{RuntimeError, VM, Value};
