//! Output backends for generated plans.

pub mod dump;
pub mod rust;

#[cfg(test)]
mod dump_tests;

pub use dump::DumpBackend;
pub use rust::{Config as RustConfig, RustBackend};

use crate::generator::GeneratedType;

/// Turns generated plans into text.
pub trait Backend {
    /// Render `types` as one output file. `module` is the schema's module path.
    fn render(&self, module: Option<&str>, types: &[GeneratedType]) -> String;
}
