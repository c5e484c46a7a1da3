//! Core compiler state and the type dispatch loop.

use bencode_gen_core::utils::encode_key;
use bencode_gen_core::{ScalarKind, TypeDesc, TypeId, TypeTable};
use bencode_gen_plan::{Instruction, Plan, Selector};

use super::emptiness::emptiness_test;
use super::error::{CompileError, CompileResult};
use crate::collect::collect_fields;
use crate::diagnostics::Diagnostics;

/// Unwrapping a declared type yields a structural one, so a second unwrap
/// that still lands on an unsupported type is final.
const MAX_UNWRAPS: usize = 2;

/// Compile type `ty`, declared as `name`, into an unfolded plan.
pub fn compile_type(
    table: &TypeTable,
    name: &str,
    ty: TypeId,
    diagnostics: &mut Diagnostics,
) -> CompileResult<Plan> {
    let mut compiler = Compiler::new(table, diagnostics);
    let instructions = compiler.compile(Selector::Root, ty, 0)?;
    Ok(Plan::new(name, instructions))
}

/// Compiler state for one plan.
pub struct Compiler<'a> {
    pub(super) table: &'a TypeTable,
    pub(super) diagnostics: &'a mut Diagnostics,
    /// Declared types being expanded, innermost last.
    pub(super) expanding: Vec<TypeId>,
}

impl<'a> Compiler<'a> {
    pub fn new(table: &'a TypeTable, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            table,
            diagnostics,
            expanding: Vec::new(),
        }
    }

    /// Instructions that write the value at `selector`, of type `ty`.
    ///
    /// `depth` is the loop nesting level, used to name loop variables.
    pub fn compile(
        &mut self,
        selector: Selector,
        ty: TypeId,
        depth: u16,
    ) -> CompileResult<Vec<Instruction>> {
        let mark = self.expanding.len();
        let result = self.dispatch(selector, ty, depth);
        self.expanding.truncate(mark);
        result
    }

    fn dispatch(
        &mut self,
        mut selector: Selector,
        ty: TypeId,
        depth: u16,
    ) -> CompileResult<Vec<Instruction>> {
        let table = self.table;
        let mut current = ty;
        let mut owner: Option<&str> = table.name_of(ty);
        let mut unwraps = 0;

        loop {
            if table.is_native(current) {
                log::debug!("found native support in {}", table.display(current));
                return Ok(vec![Instruction::WriteNative(selector)]);
            }
            if table.is_duration(current) {
                return Ok(int_plan(selector.seconds()));
            }

            match table.get(current) {
                TypeDesc::Pointer(inner) => {
                    selector = selector.deref();
                    current = *inner;
                    owner = table.name_of(current);
                    continue;
                }
                TypeDesc::Struct(_) => {
                    let owner = owner
                        .map_or_else(|| table.display(current).to_string(), str::to_string);
                    return self.compile_struct(selector, &owner, current, depth);
                }
                TypeDesc::Mapping { key, value } => {
                    return self.compile_map(selector, current, *key, *value, depth);
                }
                TypeDesc::Sequence { elem, .. } => {
                    return self.compile_list(selector, *elem, depth);
                }
                TypeDesc::Scalar(ScalarKind::Bool) => {
                    return Ok(vec![
                        Instruction::literal("i"),
                        Instruction::WriteBool(selector),
                        Instruction::literal("e"),
                    ]);
                }
                TypeDesc::Scalar(ScalarKind::Int(_)) => return Ok(int_plan(selector)),
                TypeDesc::Scalar(ScalarKind::Str) => {
                    return Ok(vec![Instruction::WriteString(selector)]);
                }
                TypeDesc::Scalar(ScalarKind::Float(_))
                | TypeDesc::Duration
                | TypeDesc::Named(_)
                | TypeDesc::Native(_) => {}
            }

            let next = table.underlying(current);
            if next == current || unwraps == MAX_UNWRAPS {
                return Err(CompileError::UnsupportedType {
                    ty: table.display(ty).to_string(),
                });
            }
            if table.get(current).is_declared() {
                self.enter(current)?;
                owner = table.name_of(current);
            }
            unwraps += 1;
            current = next;
        }
    }

    /// Mark a declared type as being expanded; fails if it already is.
    fn enter(&mut self, ty: TypeId) -> CompileResult<()> {
        if self.expanding.contains(&ty) {
            return Err(CompileError::RecursiveType {
                ty: self.table.display(ty).to_string(),
            });
        }
        self.expanding.push(ty);
        Ok(())
    }

    fn compile_struct(
        &mut self,
        selector: Selector,
        owner: &str,
        body: TypeId,
        depth: u16,
    ) -> CompileResult<Vec<Instruction>> {
        let mut fields = collect_fields(self.table, owner, body, self.diagnostics);
        // Stable: fields with equal names keep declaration order.
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = vec![Instruction::literal("d")];
        for field in &fields {
            let field_selector = field.selector(&selector);
            let mut plan = vec![Instruction::Literal(encode_key(&field.output_name()))];
            plan.extend(self.compile(field_selector.clone(), field.ty, depth)?);

            if !field.omit_empty() {
                out.extend(plan);
                continue;
            }
            let test = emptiness_test(self.table, field.ty).ok_or_else(|| {
                CompileError::OmitEmptyUnsupported {
                    field: format!("{owner}.{}", field.name),
                    ty: self.table.display(field.ty).to_string(),
                }
            })?;
            out.push(Instruction::Conditional {
                selector: field_selector,
                test,
                body: plan,
            });
        }
        out.push(Instruction::literal("e"));
        Ok(out)
    }

    fn compile_list(
        &mut self,
        selector: Selector,
        elem: TypeId,
        depth: u16,
    ) -> CompileResult<Vec<Instruction>> {
        let body = self.compile(Selector::Elem(depth), elem, depth + 1)?;
        Ok(vec![
            Instruction::literal("l"),
            Instruction::List {
                selector,
                depth,
                body,
            },
            Instruction::literal("e"),
        ])
    }

    fn compile_map(
        &mut self,
        selector: Selector,
        map: TypeId,
        key: TypeId,
        value: TypeId,
        depth: u16,
    ) -> CompileResult<Vec<Instruction>> {
        let table = self.table;
        if !matches!(table.get(table.underlying(key)), TypeDesc::Scalar(ScalarKind::Str)) {
            return Err(CompileError::NonStringMapKey {
                map: table.display(map).to_string(),
                key: table.display(key).to_string(),
            });
        }
        let key_cast = table.name_of(key).map(str::to_string);

        let mut body = self.compile(Selector::Key(depth), key, depth + 1)?;
        body.extend(self.compile(selector.clone().value(depth), value, depth + 1)?);
        Ok(vec![
            Instruction::literal("d"),
            Instruction::Map {
                selector,
                depth,
                key_cast,
                body,
            },
            Instruction::literal("e"),
        ])
    }
}

fn int_plan(selector: Selector) -> Vec<Instruction> {
    vec![
        Instruction::literal("i"),
        Instruction::WriteInt(selector),
        Instruction::literal("e"),
    ]
}
