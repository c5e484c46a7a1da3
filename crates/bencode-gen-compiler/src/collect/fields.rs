//! Field Collector: the ordered list of fields a struct encodes.
//!
//! Embedded struct members are flattened into the parent. Problems with a
//! single field are warnings; the field is skipped or its tag ignored.

use bencode_gen_core::utils::derive_output_name;
use bencode_gen_core::{FieldDesc, TypeDesc, TypeId, TypeTable};
use bencode_gen_plan::Selector;

use super::tag::{Tag, parse_tag};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared field name.
    pub name: String,
    /// Embedded members traversed to reach the field, outermost first.
    pub path: Vec<String>,
    pub ty: TypeId,
    pub tag: Option<Tag>,
}

impl Field {
    /// Dictionary key: the tag's name if set, otherwise derived from the declared name.
    pub fn output_name(&self) -> String {
        match self.tag.as_ref().and_then(|tag| tag.name.as_deref()) {
            Some(name) => name.to_string(),
            None => derive_output_name(&self.name),
        }
    }

    pub fn omit_empty(&self) -> bool {
        self.tag.as_ref().is_some_and(|tag| tag.omit_empty)
    }

    /// Access path from the owning struct's selector.
    pub fn selector(&self, base: &Selector) -> Selector {
        self.path
            .iter()
            .chain(std::iter::once(&self.name))
            .fold(base.clone(), |sel, member| sel.field(member.as_str()))
    }
}

/// Collect the fields of struct type `ty` in declaration order.
///
/// `owner` names the struct in diagnostics. Returns nothing if `ty` is not a struct.
pub fn collect_fields(
    table: &TypeTable,
    owner: &str,
    ty: TypeId,
    diagnostics: &mut Diagnostics,
) -> Vec<Field> {
    let mut collector = Collector {
        table,
        diagnostics,
        fields: Vec::new(),
        stack: Vec::new(),
    };
    collector.walk(owner, table.underlying(ty), &[]);
    collector.fields
}

/// Whether any collected field of `ty` carries a valid tag.
pub fn has_tagged_field(
    table: &TypeTable,
    owner: &str,
    ty: TypeId,
    diagnostics: &mut Diagnostics,
) -> bool {
    collect_fields(table, owner, ty, diagnostics)
        .iter()
        .any(|field| field.tag.is_some())
}

struct Collector<'a> {
    table: &'a TypeTable,
    diagnostics: &'a mut Diagnostics,
    fields: Vec<Field>,
    /// Struct bodies being walked, to stop embedding cycles.
    stack: Vec<TypeId>,
}

impl Collector<'_> {
    fn walk(&mut self, owner: &str, body: TypeId, path: &[String]) {
        let table = self.table;
        let TypeDesc::Struct(members) = table.get(body) else {
            return;
        };
        self.stack.push(body);
        for member in members {
            let location = format!("{owner}.{}", member.name);
            let tag = self.parse_member_tag(&location, member);
            if member.embedded {
                self.embed(&location, member, tag.is_some(), path);
            } else {
                self.fields.push(Field {
                    name: member.name.clone(),
                    path: path.to_vec(),
                    ty: member.ty,
                    tag,
                });
            }
        }
        self.stack.pop();
    }

    fn embed(&mut self, location: &str, member: &FieldDesc, tagged: bool, path: &[String]) {
        let body = self.table.underlying(member.ty);
        if !matches!(self.table.get(body), TypeDesc::Struct(_)) {
            self.diagnostics
                .report(DiagnosticKind::UnsupportedEmbedding, location)
                .message(format!(
                    "`{}` is not a struct",
                    self.table.display(member.ty)
                ))
                .emit();
            return;
        }
        if self.stack.contains(&body) {
            self.diagnostics
                .report(DiagnosticKind::UnsupportedEmbedding, location)
                .message(format!("`{}` embeds itself", self.table.display(member.ty)))
                .emit();
            return;
        }
        if tagged {
            self.diagnostics
                .report(DiagnosticKind::TagOnEmbeddedField, location)
                .emit();
        }
        log::trace!("flattening embedded member {location}");
        let mut inner_path = path.to_vec();
        inner_path.push(member.name.clone());
        self.walk(&member.name, body, &inner_path);
    }

    fn parse_member_tag(&mut self, location: &str, member: &FieldDesc) -> Option<Tag> {
        let raw = member.tag.as_deref()?;
        match parse_tag(raw) {
            Ok(tag) => Some(tag),
            Err(err) => {
                self.diagnostics
                    .report(DiagnosticKind::MalformedTag, location)
                    .message(&err.message)
                    .snippet(raw, err.range, err.label)
                    .emit();
                None
            }
        }
    }
}
