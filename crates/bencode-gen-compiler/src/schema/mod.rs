//! Schema front end: JSON document to type table.

mod lower;
mod parser;

#[cfg(test)]
mod lower_tests;

pub use parser::{ParseError, TypeExpr, parse_type_expr};

use bencode_gen_core::schema::{RawSchema, parse_schema};
use bencode_gen_core::{TypeId, TypeTable};

use crate::diagnostics::Diagnostics;
use crate::{Error, Result};

/// A lowered, validated schema.
#[derive(Debug, Clone)]
pub struct Schema {
    module: Option<String>,
    table: TypeTable,
}

impl Schema {
    /// Parse and lower a JSON schema document.
    pub fn parse(json: &str) -> Result<Self> {
        let raw = parse_schema(json)?;
        Self::from_raw(&raw)
    }

    pub fn from_raw(raw: &RawSchema) -> Result<Self> {
        let mut diagnostics = Diagnostics::new();
        let table = lower::lower(raw, &mut diagnostics);
        if diagnostics.has_errors() {
            return Err(Error::Schema(diagnostics));
        }
        log::debug!(
            "lowered {} declared types into {} descriptors",
            raw.types.len(),
            table.len()
        );
        Ok(Self {
            module: raw.module.clone(),
            table,
        })
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.table.lookup(name)
    }
}
