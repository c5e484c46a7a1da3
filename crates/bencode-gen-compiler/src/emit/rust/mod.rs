//! Rust source backend.
//!
//! Emits one `impl Bencode for <Type>` per plan. Schema type names are the
//! Rust type names and schema field names are the Rust field names; declared
//! aliases are expected to be plain `type` aliases.

mod config;
mod emitter;
mod place;


pub use config::Config;
pub use emitter::Emitter;

use super::Backend;
use crate::generator::GeneratedType;

#[derive(Clone, Debug, Default)]
pub struct RustBackend {
    config: Config,
}

impl RustBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Backend for RustBackend {
    fn render(&self, module: Option<&str>, types: &[GeneratedType]) -> String {
        Emitter::new(&self.config).emit(module, types)
    }
}
