//! Lowering: resolve raw declarations into descriptors.
//!
//! Runs in two passes so declarations can refer to each other in any order:
//! every name is declared first, then bodies are parsed and resolved.

use std::collections::HashSet;

use bencode_gen_core::schema::{RawField, RawSchema, RawTypeDecl};
use bencode_gen_core::utils::is_identifier;
use bencode_gen_core::{FieldDesc, NamedDesc, ScalarKind, SeqKind, TypeDesc, TypeId, TypeTable};

use super::parser::{TypeExpr, parse_type_expr};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

const RESERVED: &[&str] = &["duration", "Option", "Vec", "Map"];

pub(super) fn lower(raw: &RawSchema, diagnostics: &mut Diagnostics) -> TypeTable {
    let mut lowerer = Lowerer {
        table: TypeTable::new(),
        diagnostics,
    };

    let declared: Vec<(&RawTypeDecl, TypeId)> = raw
        .types
        .iter()
        .filter_map(|decl| lowerer.declare(decl).map(|id| (decl, id)))
        .collect();

    for (decl, id) in &declared {
        lowerer.define(decl, *id);
    }
    lowerer.check_alias_cycles(&declared);

    lowerer.table
}

struct Lowerer<'d> {
    table: TypeTable,
    diagnostics: &'d mut Diagnostics,
}

impl Lowerer<'_> {
    fn declare(&mut self, decl: &RawTypeDecl) -> Option<TypeId> {
        let name = decl.name.as_str();
        if !is_identifier(name) || RESERVED.contains(&name) || ScalarKind::from_name(name).is_some()
        {
            self.diagnostics
                .report(DiagnosticKind::InvalidName, "schema")
                .message(name)
                .emit();
            return None;
        }

        let id = self.table.declare(name, decl.native);
        if id.is_none() {
            self.diagnostics
                .report(DiagnosticKind::DuplicateType, "schema")
                .message(name)
                .emit();
        }
        id
    }

    fn define(&mut self, decl: &RawTypeDecl, id: TypeId) {
        let body = match (&decl.fields, &decl.body) {
            (Some(_), Some(_)) => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidDeclaration, decl.name.as_str())
                    .message("has both a struct body and a type expression")
                    .emit();
                None
            }
            (Some(fields), None) => self.lower_struct(&decl.name, fields),
            (None, Some(expr)) => self.lower_expr(&decl.name, expr),
            // Opaque native type: encodes itself, nothing to resolve.
            (None, None) if decl.native => None,
            (None, None) => {
                self.diagnostics
                    .report(DiagnosticKind::InvalidDeclaration, decl.name.as_str())
                    .message("needs a struct body or a type expression")
                    .emit();
                None
            }
        };

        if let Some(body) = body {
            self.table.define(id, body);
        }
    }

    fn lower_struct(&mut self, owner: &str, fields: &[RawField]) -> Option<TypeId> {
        let mut seen = HashSet::new();
        let mut descs = Vec::with_capacity(fields.len());
        let mut valid = true;

        for field in fields {
            let location = format!("{owner}.{}", field.name);
            if !is_identifier(&field.name) {
                self.diagnostics
                    .report(DiagnosticKind::InvalidName, owner)
                    .message(&field.name)
                    .emit();
                valid = false;
                continue;
            }
            if !seen.insert(field.name.as_str()) {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateField, owner)
                    .message(&field.name)
                    .emit();
                valid = false;
                continue;
            }
            match self.lower_expr(&location, &field.ty) {
                Some(ty) => descs.push(FieldDesc {
                    name: field.name.clone(),
                    ty,
                    tag: field.tag.clone(),
                    embedded: field.embedded,
                }),
                None => valid = false,
            }
        }

        valid.then(|| self.table.intern(TypeDesc::Struct(descs)))
    }

    fn lower_expr(&mut self, location: &str, source: &str) -> Option<TypeId> {
        match parse_type_expr(source) {
            Ok(expr) => self.resolve(location, source, &expr),
            Err(err) => {
                self.diagnostics
                    .report(DiagnosticKind::MalformedTypeExpr, location)
                    .message(&err.message)
                    .snippet(source, err.span, "here")
                    .emit();
                None
            }
        }
    }

    fn resolve(&mut self, location: &str, source: &str, expr: &TypeExpr<'_>) -> Option<TypeId> {
        let desc = match expr {
            TypeExpr::Scalar(kind) => TypeDesc::Scalar(*kind),
            TypeExpr::Duration => TypeDesc::Duration,
            TypeExpr::Option(inner) => TypeDesc::Pointer(self.resolve(location, source, inner)?),
            TypeExpr::Vec(inner) => TypeDesc::Sequence {
                elem: self.resolve(location, source, inner)?,
                kind: SeqKind::Slice,
            },
            TypeExpr::Array(inner, len) => TypeDesc::Sequence {
                elem: self.resolve(location, source, inner)?,
                kind: SeqKind::Array(*len),
            },
            TypeExpr::Map(key, value) => {
                // Resolve both sides so each unknown name is reported.
                let key = self.resolve(location, source, key);
                let value = self.resolve(location, source, value);
                TypeDesc::Mapping {
                    key: key?,
                    value: value?,
                }
            }
            TypeExpr::Named(name, span) => {
                let found = self.table.lookup(name);
                if found.is_none() {
                    self.diagnostics
                        .report(DiagnosticKind::UnknownType, location)
                        .message(*name)
                        .snippet(source, span.clone(), "not declared")
                        .emit();
                }
                return found;
            }
        };
        Some(self.table.intern(desc))
    }

    /// Report declared types whose alias chain leads back to themselves.
    fn check_alias_cycles(&mut self, declared: &[(&RawTypeDecl, TypeId)]) {
        for (decl, id) in declared {
            let mut chain = vec![*id];
            let mut current = *id;
            while let Some(NamedDesc {
                body: Some(body), ..
            }) = self.table.get(current).declared()
            {
                let body = *body;
                if !self.table.get(body).is_declared() {
                    break;
                }
                if body == *id {
                    let mut names: Vec<&str> =
                        chain.iter().filter_map(|t| self.table.name_of(*t)).collect();
                    names.push(decl.name.as_str());
                    self.diagnostics
                        .report(DiagnosticKind::AliasCycle, decl.name.as_str())
                        .message(names.join(" -> "))
                        .emit();
                    break;
                }
                // A cycle further down the chain is reported by its own members.
                if chain.contains(&body) {
                    break;
                }
                chain.push(body);
                current = body;
            }
        }
    }
}
