//! bencode-gen compiler: schema lowering, plan compilation and code generation.
//!
//! This crate provides the generation pipeline:
//! - `schema` - JSON schema parsing, type expressions, lowering into a type table
//! - `collect` - struct tag parsing and field collection (embedded members flattened)
//! - `compile` - encoding plan construction per type
//! - `generator` - type selection and per-type plan generation
//! - `emit` - Rust source and plan dump backends
//! - `diagnostics` - error and warning reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod collect;
pub mod compile;
pub mod diagnostics;
pub mod emit;
pub mod generator;
pub mod schema;

#[cfg(test)]
pub mod test_utils;

pub use compile::CompileError;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{Backend, DumpBackend, RustBackend, RustConfig};
pub use generator::{GenerateOutput, GeneratedType, Generator, GeneratorConfig, TypeFailure};
pub use schema::Schema;

/// Errors that stop a schema from being used at all.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("schema is not valid JSON: {0}")]
    Json(std::sync::Arc<serde_json::Error>),

    #[error("schema lowering failed with {} errors", .0.error_count())]
    Schema(Diagnostics),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(std::sync::Arc::new(err))
    }
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, Error>;
