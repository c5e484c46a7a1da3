//! Core data structures for bencode-gen.
//!
//! This crate holds the pieces shared by every stage of the pipeline:
//! - Type descriptors and the [`TypeTable`] arena they live in
//! - The raw schema layer deserialized straight from JSON
//! - Runtime helpers called by generated encoders (and by the reference VM)
//! - Small naming and escaping utilities

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod runtime;
pub mod schema;
pub mod ty;
pub mod utils;

pub use colors::Colors;
pub use runtime::Bencode;
pub use schema::{RawField, RawSchema, RawTypeDecl};
pub use ty::{
    FieldDesc, FloatKind, IntKind, NamedDesc, ScalarKind, SeqKind, TypeDesc, TypeId, TypeTable,
};

#[cfg(test)]
mod utils_tests;
#[cfg(test)]
mod schema_tests;
